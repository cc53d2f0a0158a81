//! The caller-supplied palette.
//!
//! A [`Palette`] holds one optional RGBA token per [`Role`]. Tokens are kept
//! as the caller sent them; parsing happens in each target's conversion step,
//! because some targets (Hyper) forward the raw text untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{parse_rgba, Rgba};
use crate::error::RenderError;

/// A named color role in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Foreground,
    Background,
    Link,
    Selected,
    SelectedText,
    Accent,
}

impl Role {
    /// Every role, in palette order.
    pub const ALL: [Role; 6] = [
        Role::Foreground,
        Role::Background,
        Role::Link,
        Role::Selected,
        Role::SelectedText,
        Role::Accent,
    ];

    /// The role's field name in the request JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Foreground => "foreground",
            Role::Background => "background",
            Role::Link => "link",
            Role::Selected => "selected",
            Role::SelectedText => "selectedText",
            Role::Accent => "accent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette colors as received from the caller.
///
/// Field names serialize in camelCase (`selectedText`) to match the request
/// format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token for a role, builder style.
    pub fn with(mut self, role: Role, token: impl Into<String>) -> Self {
        *self.slot_mut(role) = Some(token.into());
        self
    }

    /// Returns the raw token for a role, if present.
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Foreground => self.foreground.as_deref(),
            Role::Background => self.background.as_deref(),
            Role::Link => self.link.as_deref(),
            Role::Selected => self.selected.as_deref(),
            Role::SelectedText => self.selected_text.as_deref(),
            Role::Accent => self.accent.as_deref(),
        }
    }

    /// Parses a role that must be present.
    ///
    /// # Errors
    ///
    /// [`RenderError::MissingColor`] if the role is absent,
    /// [`RenderError::Color`] if its token does not parse.
    pub fn require(&self, role: Role) -> Result<Rgba, RenderError> {
        let token = self
            .get(role)
            .ok_or_else(|| RenderError::MissingColor(role.as_str().to_string()))?;
        parse_role(role, token)
    }

    /// Parses a role that may be absent. Absence is not an error.
    pub fn optional(&self, role: Role) -> Result<Option<Rgba>, RenderError> {
        self.get(role).map(|token| parse_role(role, token)).transpose()
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Foreground => &mut self.foreground,
            Role::Background => &mut self.background,
            Role::Link => &mut self.link,
            Role::Selected => &mut self.selected,
            Role::SelectedText => &mut self.selected_text,
            Role::Accent => &mut self.accent,
        }
    }
}

fn parse_role(role: Role, token: &str) -> Result<Rgba, RenderError> {
    parse_rgba(token).map_err(|source| RenderError::Color {
        role: role.as_str().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let palette: Palette = serde_json::from_str(
            r#"{"foreground": "rgba(1, 2, 3, 1)", "selectedText": "rgba(4, 5, 6, 1)"}"#,
        )
        .unwrap();
        assert_eq!(palette.get(Role::Foreground), Some("rgba(1, 2, 3, 1)"));
        assert_eq!(palette.get(Role::SelectedText), Some("rgba(4, 5, 6, 1)"));
        assert_eq!(palette.get(Role::Link), None);
    }

    #[test]
    fn test_serialize_skips_absent_roles() {
        let palette = Palette::new().with(Role::Accent, "rgba(1, 1, 1, 1)");
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"{"accent":"rgba(1, 1, 1, 1)"}"#);
    }

    #[test]
    fn test_require_missing() {
        let err = Palette::new().require(Role::Link).unwrap_err();
        assert!(matches!(err, RenderError::MissingColor(ref r) if r == "link"));
    }

    #[test]
    fn test_require_malformed_names_role() {
        let palette = Palette::new().with(Role::Selected, "rgba(1,2,3)");
        let err = palette.require(Role::Selected).unwrap_err();
        assert!(matches!(err, RenderError::Color { ref role, .. } if role == "selected"));
    }

    #[test]
    fn test_optional_absent_is_none() {
        assert_eq!(Palette::new().optional(Role::Accent).unwrap(), None);
    }

    #[test]
    fn test_optional_present_still_validates() {
        let palette = Palette::new().with(Role::Accent, "oops");
        assert!(palette.optional(Role::Accent).is_err());
    }

    #[test]
    fn test_role_names() {
        let names: Vec<_> = Role::ALL.iter().map(Role::as_str).collect();
        assert_eq!(
            names,
            ["foreground", "background", "link", "selected", "selectedText", "accent"]
        );
    }
}
