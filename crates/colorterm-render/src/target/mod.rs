//! Terminal emulator targets.
//!
//! Every target turns a [`Palette`] into a configuration document in two
//! steps, each of which either succeeds or aborts the whole render:
//!
//! ```text
//! Palette --convert--> State --render(template)--> Document
//! ```
//!
//! The state type is target-specific and is what the template sees; its
//! field names are the template's placeholder names.
//!
//! | Target | Template | Encoding | Validates colors |
//! |--------|----------|----------|------------------|
//! | [`Iterm`] | `iterm.itermcolors.jinja` | fractional 0–1 components | yes |
//! | [`Warp`] | `warp.yaml.jinja` | `#rrggbb` | yes |
//! | [`Hyper`] | `hyper.js.jinja` | raw passthrough | no |
//! | [`Kitty`] | `kitty.conf.jinja` | `#rrggbb` | yes |
//! | [`Alacritty`] | `alacritty.toml.jinja` | `#rrggbb` | yes |

mod alacritty;
mod hyper;
mod iterm;
mod kitty;
mod warp;

pub use alacritty::{Alacritty, AlacrittyState};
pub use hyper::{Hyper, HyperState};
pub use iterm::{Iterm, ItermColor, ItermState};
pub use kitty::{Kitty, KittyState};
pub use warp::{Warp, WarpState};

use serde::Serialize;

use crate::error::RenderError;
use crate::palette::Palette;
use crate::template::Renderer;

/// A rendered configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: &'static str,
    content: String,
}

impl Document {
    pub fn new(file_name: &'static str, content: String) -> Self {
        Self { file_name, content }
    }

    /// Suggested file name for the document, e.g. `colorterm.yaml`.
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A terminal emulator configuration format.
pub trait ThemeTarget {
    /// Converted palette handed to the template.
    type State: Serialize;

    /// Short identifier used in logs.
    const NAME: &'static str;

    /// Template name in the [`TemplateRegistry`](crate::template::TemplateRegistry).
    const TEMPLATE: &'static str;

    /// Suggested file name of the rendered document.
    const FILE_NAME: &'static str;

    /// Converts the caller's palette into this target's state.
    fn convert(palette: &Palette) -> Result<Self::State, RenderError>;

    /// Renders a converted state through the target's template.
    fn render(state: &Self::State, renderer: &Renderer) -> Result<Document, RenderError> {
        let content = renderer.render(Self::TEMPLATE, state)?;
        Ok(Document::new(Self::FILE_NAME, content))
    }
}

/// Runs convert then render for target `T`.
///
/// ```rust
/// use colorterm_render::{render_target, Palette, Renderer, Role, Warp};
///
/// let palette = Palette::new()
///     .with(Role::Foreground, "rgba(255, 255, 255, 1)")
///     .with(Role::Background, "rgba(0, 0, 0, 1)")
///     .with(Role::Link, "rgba(10, 20, 30, 1)");
///
/// let renderer = Renderer::new().unwrap();
/// let doc = render_target::<Warp>(&palette, &renderer).unwrap();
/// assert!(doc.content().contains("accent: '#0a141e'"));
/// ```
pub fn render_target<T: ThemeTarget>(
    palette: &Palette,
    renderer: &Renderer,
) -> Result<Document, RenderError> {
    let state = T::convert(palette)?;
    tracing::debug!(format = T::NAME, "palette converted");
    let document = T::render(&state, renderer)?;
    tracing::debug!(
        format = T::NAME,
        file = document.file_name(),
        bytes = document.len(),
        "document rendered"
    );
    Ok(document)
}
