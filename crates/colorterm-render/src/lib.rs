//! # colorterm-render - Palette Conversion and Theme Rendering
//!
//! `colorterm-render` turns one abstract terminal palette into the native
//! configuration formats of several terminal emulators.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: the caller's colors, one optional `rgba(...)` token per [`Role`]
//! - [`Rgba`]: a parsed color (raw 0–255 R/G/B, fractional 0–1 alpha)
//! - [`color`]: parsing and the per-format encoders (fractional, `#rrggbb`, `#rrggbbaa`)
//! - [`ThemeTarget`]: one implementation per emulator (`convert` then `render`)
//! - [`Renderer`]: compiled templates, built once and shared
//!
//! ## Quick Start
//!
//! ```rust
//! use colorterm_render::{render_target, Iterm, Palette, Renderer, Role};
//!
//! let palette = Palette::new()
//!     .with(Role::Foreground, "rgba(255, 255, 255, 1)")
//!     .with(Role::Background, "rgba(0, 0, 0, 1)")
//!     .with(Role::Link, "rgba(10, 20, 30, 1)")
//!     .with(Role::Selected, "rgba(40, 50, 60, 1)")
//!     .with(Role::SelectedText, "rgba(70, 80, 90, 1)");
//!
//! let renderer = Renderer::new().unwrap();
//! let doc = render_target::<Iterm>(&palette, &renderer).unwrap();
//!
//! assert_eq!(doc.file_name(), "colorterm.itermcolors");
//! assert!(doc.content().contains("<real>1.0</real>"));
//! ```
//!
//! ## Custom Templates
//!
//! Bundled templates can be replaced per name from a directory:
//!
//! ```rust,ignore
//! use colorterm_render::{Renderer, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::embedded();
//! registry.add_template_dir("./templates")?;
//! let renderer = Renderer::from_registry(&registry)?;
//! ```

pub mod color;
mod error;
pub mod palette;
pub mod target;
pub mod template;

pub use error::RenderError;

pub use color::{parse_rgba, ColorParseError, Rgba};

pub use palette::{Palette, Role};

pub use target::{
    render_target, Alacritty, Document, Hyper, Iterm, Kitty, ThemeTarget, Warp,
};

pub use template::{MiniJinjaEngine, Renderer, TemplateEngine, TemplateRegistry};
