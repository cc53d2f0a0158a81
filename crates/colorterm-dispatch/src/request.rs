//! The generate request body.

use colorterm_render::Palette;
use serde::{Deserialize, Serialize};

/// A request to build a theme archive.
///
/// Wire format:
///
/// ```json
/// {
///   "generateMode": "iterm",
///   "colors": { "foreground": "rgba(255,255,255,1)", "selectedText": "..." }
/// }
/// ```
///
/// `mode` is accepted in place of `generateMode`. A missing `colors` object
/// deserializes as an empty palette and fails later at conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(alias = "mode")]
    pub generate_mode: String,
    #[serde(default)]
    pub colors: Palette,
}

impl GenerateRequest {
    pub fn new(mode: impl Into<String>, colors: Palette) -> Self {
        Self {
            generate_mode: mode.into(),
            colors,
        }
    }

    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_slice(input: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(input)
    }
}
