//! Template rendering for target documents.
//!
//! Each target format is a MiniJinja template fed with that target's
//! converted state. Templates are opaque to the rest of the crate: the only
//! contract is that placeholder names match the state's field names.
//!
//! ## Key Types
//!
//! - [`TemplateRegistry`]: bundled templates plus directory overrides
//! - [`Renderer`]: compiles a registry once, renders by name
//! - [`TemplateEngine`] / [`MiniJinjaEngine`]: backend abstraction
//!
//! ## Template Helpers
//!
//! See [`filters`] for `decimalize`, `hex` and `hex_rgba`.

pub mod engine;
pub mod filters;
pub mod registry;
mod renderer;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use registry::{TemplateRegistry, EMBEDDED_TEMPLATES, TEMPLATE_EXTENSIONS};
pub use renderer::Renderer;
