//! Warp YAML themes.
//!
//! Warp themes take three `#rrggbb` colors: background, foreground and an
//! accent. The accent is sourced from the palette's `link` role; the
//! dedicated `accent` role is not consulted. Selection colors have no Warp
//! equivalent and are ignored.

use serde::Serialize;

use super::ThemeTarget;
use crate::error::RenderError;
use crate::palette::{Palette, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarpState {
    pub background: String,
    pub foreground: String,
    pub accent: String,
}

/// The Warp target.
pub struct Warp;

impl ThemeTarget for Warp {
    type State = WarpState;

    const NAME: &'static str = "warp";
    const TEMPLATE: &'static str = "warp.yaml.jinja";
    const FILE_NAME: &'static str = "colorterm.yaml";

    fn convert(palette: &Palette) -> Result<WarpState, RenderError> {
        let background = palette.require(Role::Background)?.to_hex_rgb();
        let foreground = palette.require(Role::Foreground)?.to_hex_rgb();
        let accent = palette.require(Role::Link)?.to_hex_rgb();

        Ok(WarpState {
            background,
            foreground,
            accent,
        })
    }
}
