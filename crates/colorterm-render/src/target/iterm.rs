//! iTerm2 `.itermcolors` color presets.
//!
//! iTerm2 presets are property lists where each color is a dictionary of
//! `<real>` components in the 0–1 range. R, G and B are divided by 255;
//! alpha is already fractional and passes through unchanged.

use serde::Serialize;

use super::ThemeTarget;
use crate::color::Rgba;
use crate::error::RenderError;
use crate::palette::{Palette, Role};

/// One color in iTerm2's component form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItermColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
    /// The parsed channels before scaling, for templates that apply
    /// `decimalize` themselves.
    pub raw: [f64; 4],
}

impl From<Rgba> for ItermColor {
    fn from(color: Rgba) -> Self {
        let [red, green, blue, alpha] = color.fractional();
        Self {
            red,
            green,
            blue,
            alpha,
            raw: color.channels(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItermState {
    pub foreground: ItermColor,
    pub background: ItermColor,
    pub link: ItermColor,
    pub selected: ItermColor,
    pub selected_text: ItermColor,
    /// Rendered as the cursor color when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<ItermColor>,
}

/// The iTerm2 target.
pub struct Iterm;

impl ThemeTarget for Iterm {
    type State = ItermState;

    const NAME: &'static str = "iterm";
    const TEMPLATE: &'static str = "iterm.itermcolors.jinja";
    const FILE_NAME: &'static str = "colorterm.itermcolors";

    fn convert(palette: &Palette) -> Result<ItermState, RenderError> {
        let foreground = palette.require(Role::Foreground)?.into();
        let background = palette.require(Role::Background)?.into();
        let link = palette.require(Role::Link)?.into();
        let selected_text = palette.require(Role::SelectedText)?.into();
        let selected = palette.require(Role::Selected)?.into();
        let accent = palette.optional(Role::Accent)?.map(ItermColor::from);

        Ok(ItermState {
            foreground,
            background,
            link,
            selected,
            selected_text,
            accent,
        })
    }
}
