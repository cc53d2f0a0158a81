//! kitty `key value` color configuration.

use serde::Serialize;

use super::ThemeTarget;
use crate::error::RenderError;
use crate::palette::{Palette, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KittyState {
    pub foreground: String,
    pub background: String,
    /// Background alpha clamped to `0.0..=1.0`, used as kitty's
    /// `background_opacity`. Hex channels still wrap.
    pub background_opacity: f64,
    pub selection_foreground: String,
    pub selection_background: String,
    pub url_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// The kitty target.
pub struct Kitty;

impl ThemeTarget for Kitty {
    type State = KittyState;

    const NAME: &'static str = "kitty";
    const TEMPLATE: &'static str = "kitty.conf.jinja";
    const FILE_NAME: &'static str = "colorterm.conf";

    fn convert(palette: &Palette) -> Result<KittyState, RenderError> {
        let foreground = palette.require(Role::Foreground)?;
        let background = palette.require(Role::Background)?;
        let link = palette.require(Role::Link)?;
        let selected_text = palette.require(Role::SelectedText)?;
        let selected = palette.require(Role::Selected)?;
        let accent = palette.optional(Role::Accent)?;

        Ok(KittyState {
            foreground: foreground.to_hex_rgb(),
            background: background.to_hex_rgb(),
            background_opacity: background.a.clamp(0.0, 1.0),
            selection_foreground: selected_text.to_hex_rgb(),
            selection_background: selected.to_hex_rgb(),
            url_color: link.to_hex_rgb(),
            cursor: accent.map(|c| c.to_hex_rgb()),
        })
    }
}
