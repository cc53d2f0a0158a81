//! Generate modes.
//!
//! [`Mode`] is the closed set of targets a caller can ask for. Each variant
//! maps to exactly one [`ThemeTarget`] implementation.

use std::fmt;
use std::str::FromStr;

use colorterm_render::{
    render_target, Alacritty, Document, Hyper, Iterm, Kitty, Palette, RenderError, Renderer,
    ThemeTarget, Warp,
};

use crate::error::DispatchError;

/// A supported terminal emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Iterm,
    Warp,
    Hyper,
    Kitty,
    Alacritty,
}

impl Mode {
    /// Every mode, in the order they are listed to users.
    pub const ALL: [Mode; 5] = [
        Mode::Iterm,
        Mode::Warp,
        Mode::Hyper,
        Mode::Kitty,
        Mode::Alacritty,
    ];

    /// Canonical identifier, as sent in `generateMode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Iterm => "iterm",
            Mode::Warp => "warp",
            Mode::Hyper => "hyper",
            Mode::Kitty => "kitty",
            Mode::Alacritty => "alacritty",
        }
    }

    /// Human-readable emulator name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Iterm => "iTerm2",
            Mode::Warp => "Warp",
            Mode::Hyper => "Hyper",
            Mode::Kitty => "kitty",
            Mode::Alacritty => "Alacritty",
        }
    }

    /// Name of the template this mode renders.
    pub fn template_name(&self) -> &'static str {
        match self {
            Mode::Iterm => Iterm::TEMPLATE,
            Mode::Warp => Warp::TEMPLATE,
            Mode::Hyper => Hyper::TEMPLATE,
            Mode::Kitty => Kitty::TEMPLATE,
            Mode::Alacritty => Alacritty::TEMPLATE,
        }
    }

    /// File name of the rendered document inside the archive.
    pub fn document_name(&self) -> &'static str {
        match self {
            Mode::Iterm => Iterm::FILE_NAME,
            Mode::Warp => Warp::FILE_NAME,
            Mode::Hyper => Hyper::FILE_NAME,
            Mode::Kitty => Kitty::FILE_NAME,
            Mode::Alacritty => Alacritty::FILE_NAME,
        }
    }

    /// Converts and renders `palette` for this mode.
    pub fn render(&self, palette: &Palette, renderer: &Renderer) -> Result<Document, RenderError> {
        match self {
            Mode::Iterm => render_target::<Iterm>(palette, renderer),
            Mode::Warp => render_target::<Warp>(palette, renderer),
            Mode::Hyper => render_target::<Hyper>(palette, renderer),
            Mode::Kitty => render_target::<Kitty>(palette, renderer),
            Mode::Alacritty => render_target::<Alacritty>(palette, renderer),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DispatchError;

    /// Parses a mode identifier, ignoring ASCII case. `iterm2` is accepted
    /// as an alias of `iterm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iterm" | "iterm2" => Ok(Mode::Iterm),
            "warp" => Ok(Mode::Warp),
            "hyper" => Ok(Mode::Hyper),
            "kitty" => Ok(Mode::Kitty),
            "alacritty" => Ok(Mode::Alacritty),
            _ => Err(DispatchError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_case_insensitive_and_alias() {
        assert_eq!("ITERM".parse::<Mode>().unwrap(), Mode::Iterm);
        assert_eq!("iTerm2".parse::<Mode>().unwrap(), Mode::Iterm);
        assert_eq!("Warp".parse::<Mode>().unwrap(), Mode::Warp);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus".parse::<Mode>().unwrap_err();
        assert!(matches!(err, DispatchError::UnknownMode(ref m) if m == "bogus"));
        assert!("".parse::<Mode>().is_err());
        assert!(" warp".parse::<Mode>().is_err());
    }

    #[test]
    fn test_names_are_distinct() {
        let mut docs: Vec<_> = Mode::ALL.iter().map(Mode::document_name).collect();
        docs.sort_unstable();
        docs.dedup();
        assert_eq!(docs.len(), Mode::ALL.len());

        let mut templates: Vec<_> = Mode::ALL.iter().map(Mode::template_name).collect();
        templates.sort_unstable();
        templates.dedup();
        assert_eq!(templates.len(), Mode::ALL.len());
    }
}
