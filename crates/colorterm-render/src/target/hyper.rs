//! Hyper `.hyper.js` color settings.
//!
//! Hyper accepts CSS color strings, so palette tokens are forwarded exactly
//! as received. Nothing is parsed: a malformed token ends up verbatim in the
//! document instead of failing the render. The background doubles as the
//! window border color.
//!
//! Every value is written as a quoted JavaScript string literal, so a token
//! keeps its exact text and can never end the string early.

use serde::Serialize;

use super::ThemeTarget;
use crate::error::RenderError;
use crate::palette::{Palette, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HyperState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// `termCSS` rule coloring links, built from `link`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_css: Option<String>,
}

/// The Hyper target.
pub struct Hyper;

impl ThemeTarget for Hyper {
    type State = HyperState;

    const NAME: &'static str = "hyper";
    const TEMPLATE: &'static str = "hyper.js.jinja";
    const FILE_NAME: &'static str = "colorterm.hyper.js";

    fn convert(palette: &Palette) -> Result<HyperState, RenderError> {
        let raw = |role: Role| palette.get(role).map(str::to_string);

        Ok(HyperState {
            foreground: raw(Role::Foreground),
            background: raw(Role::Background),
            border: raw(Role::Background),
            link: raw(Role::Link),
            selected: raw(Role::Selected),
            selected_text: raw(Role::SelectedText),
            accent: raw(Role::Accent),
            term_css: palette
                .get(Role::Link)
                .map(|link| format!("x-screen a {{ color: {}; }}", link)),
        })
    }
}
