//! Pre-compiled template renderer.

use serde::Serialize;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::registry::TemplateRegistry;
use crate::error::RenderError;

/// A renderer with every template compiled up front.
///
/// Build one at startup and share it by reference: rendering takes `&self`
/// and the renderer is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use colorterm_render::template::{Renderer, TemplateRegistry};
/// use serde_json::json;
///
/// let mut registry = TemplateRegistry::new();
/// registry.add_inline("hello.jinja", "bg {{ background }}");
///
/// let renderer = Renderer::from_registry(&registry).unwrap();
/// let out = renderer.render("hello.jinja", &json!({"background": "#000000"})).unwrap();
/// assert_eq!(out, "bg #000000");
/// ```
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
}

impl Renderer {
    /// Creates a renderer over the bundled templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_registry(&TemplateRegistry::embedded())
    }

    /// Creates a renderer that compiles every template in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateError`] for the first template that
    /// fails to compile.
    pub fn from_registry(registry: &TemplateRegistry) -> Result<Self, RenderError> {
        let mut engine = MiniJinjaEngine::new();
        for (name, content) in registry.iter() {
            engine.add_template(name, content)?;
        }
        Ok(Self::with_engine(Box::new(engine)))
    }

    /// Wraps an engine whose templates are already registered.
    pub fn with_engine(engine: Box<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Returns true if `name` can be rendered.
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }

    /// Renders a registered template with serializable data.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateNotFound`] if `name` was never registered,
    /// otherwise any serialization or evaluation error.
    pub fn render<T: Serialize + ?Sized>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        if !self.engine.has_template(name) {
            return Err(RenderError::TemplateNotFound(name.to_string()));
        }
        let value = serde_json::to_value(data)?;
        self.engine.render_named(name, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_compiles_embedded_templates() {
        let renderer = Renderer::new().unwrap();
        for (name, _) in super::super::registry::EMBEDDED_TEMPLATES {
            assert!(renderer.has_template(name));
        }
    }

    #[test]
    fn test_render_missing_template() {
        let renderer = Renderer::from_registry(&TemplateRegistry::new()).unwrap();
        let err = renderer.render("warp.yaml.jinja", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(ref n) if n == "warp.yaml.jinja"));
    }

    #[test]
    fn test_broken_template_fails_at_construction() {
        let mut registry = TemplateRegistry::new();
        registry.add_inline("broken.jinja", "{% if %}");
        assert!(matches!(
            Renderer::from_registry(&registry),
            Err(RenderError::TemplateError(_))
        ));
    }

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
