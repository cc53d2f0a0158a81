//! Alacritty TOML color configuration.
//!
//! Colors go into the `[colors.*]` tables; the link color styles URL hint
//! highlights and the background alpha becomes `window.opacity`.

use serde::Serialize;

use super::ThemeTarget;
use crate::error::RenderError;
use crate::palette::{Palette, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlacrittyState {
    pub background: String,
    pub foreground: String,
    /// Background alpha clamped to `0.0..=1.0`, which is all Alacritty
    /// accepts for `window.opacity`. Hex channels still wrap.
    pub opacity: f64,
    pub selection_background: String,
    pub selection_foreground: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// The Alacritty target.
pub struct Alacritty;

impl ThemeTarget for Alacritty {
    type State = AlacrittyState;

    const NAME: &'static str = "alacritty";
    const TEMPLATE: &'static str = "alacritty.toml.jinja";
    const FILE_NAME: &'static str = "colorterm.toml";

    fn convert(palette: &Palette) -> Result<AlacrittyState, RenderError> {
        let foreground = palette.require(Role::Foreground)?;
        let background = palette.require(Role::Background)?;
        let link = palette.require(Role::Link)?;
        let selected_text = palette.require(Role::SelectedText)?;
        let selected = palette.require(Role::Selected)?;
        let accent = palette.optional(Role::Accent)?;

        Ok(AlacrittyState {
            background: background.to_hex_rgb(),
            foreground: foreground.to_hex_rgb(),
            opacity: background.a.clamp(0.0, 1.0),
            selection_background: selected.to_hex_rgb(),
            selection_foreground: selected_text.to_hex_rgb(),
            link: link.to_hex_rgb(),
            cursor: accent.map(|c| c.to_hex_rgb()),
        })
    }
}
