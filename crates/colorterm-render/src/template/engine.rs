//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which keeps the renderers
//! independent of the template backend. The default implementation is
//! [`MiniJinjaEngine`].

use minijinja::{AutoEscape, Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
///
/// Engines are shared read-only between concurrent requests once their
/// templates are registered, hence the `Send + Sync` bound.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template string with the given data.
    ///
    /// This compiles and renders the template in one step. For repeated
    /// rendering of the same template, use [`add_template`](Self::add_template)
    /// and [`render_named`](Self::render_named).
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// The template is compiled immediately, so syntax errors surface here
    /// rather than on the first render.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Auto-escaping is off for every template name. Targets are plist, YAML,
/// JavaScript and TOML documents whose values are already encoded, and
/// MiniJinja would otherwise pick HTML or JSON escaping from the extension.
///
/// # Example
///
/// ```rust
/// use colorterm_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("{{ 255 | decimalize }}", &json!({}))
///     .unwrap();
/// assert_eq!(output, "1.0");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with the color filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        super::filters::register_filters(&mut env);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register extra filters or functions for custom templates.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        background: String,
        alpha: f64,
    }

    #[test]
    fn test_minijinja_engine_simple() {
        let engine = MiniJinjaEngine::new();
        let data = serde_json::to_value(TestData {
            background: "#000000".into(),
            alpha: 1.0,
        })
        .unwrap();
        let output = engine
            .render_template("bg={{ background }} a={{ alpha }}", &data)
            .unwrap();
        assert_eq!(output, "bg=#000000 a=1.0");
    }

    #[test]
    fn test_minijinja_engine_named_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("greeting.txt", "Hello, {{ name }}!").unwrap();
        assert!(engine.has_template("greeting.txt"));
        assert!(!engine.has_template("missing.txt"));

        let output = engine
            .render_named("greeting.txt", &serde_json::json!({"name": "World"}))
            .unwrap();
        assert_eq!(output, "Hello, World!");
    }

    #[test]
    fn test_no_escaping_for_xml_or_js_names() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("doc.xml", "<v>{{ raw }}</v>").unwrap();
        engine.add_template("doc.js", "x = '{{ raw }}';").unwrap();
        let data = serde_json::json!({"raw": "rgba(1, 2, 3, 1) & <b>"});

        assert_eq!(
            engine.render_named("doc.xml", &data).unwrap(),
            "<v>rgba(1, 2, 3, 1) & <b></v>"
        );
        assert_eq!(
            engine.render_named("doc.js", &data).unwrap(),
            "x = 'rgba(1, 2, 3, 1) & <b>';"
        );
    }

    #[test]
    fn test_keeps_trailing_newline() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("line\n", &serde_json::Value::Null)
            .unwrap();
        assert_eq!(output, "line\n");
    }

    #[test]
    fn test_syntax_error_on_add() {
        let mut engine = MiniJinjaEngine::new();
        let result = engine.add_template("broken", "{{ unclosed");
        assert!(matches!(result, Err(RenderError::TemplateError(_))));
    }

    #[test]
    fn test_render_named_missing() {
        let engine = MiniJinjaEngine::new();
        let result = engine.render_named("nope", &serde_json::Value::Null);
        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }
}
