//! Template registry: bundled templates plus on-disk overrides.
//!
//! Every target ships a default template compiled into the binary. A
//! deployment can replace any of them, or add new ones for custom
//! engines, by pointing [`TemplateRegistry::add_template_dir`] at a directory.
//!
//! # Resolution
//!
//! Templates are keyed by file name including extension
//! (`warp.yaml.jinja`). Later sources replace earlier ones, so the usual
//! order is:
//!
//! 1. [`TemplateRegistry::embedded`] - bundled defaults
//! 2. [`TemplateRegistry::add_template_dir`] - deployment overrides
//! 3. [`TemplateRegistry::add_inline`] - programmatic overrides (tests)
//!
//! Directory loading is flat (no recursion) and only picks up files with a
//! recognized [`TEMPLATE_EXTENSIONS`] suffix.
//!
//! # Example
//!
//! ```rust,ignore
//! use colorterm_render::template::TemplateRegistry;
//!
//! let mut registry = TemplateRegistry::embedded();
//! registry.add_template_dir("/etc/colorterm/templates")?;
//! let content = registry.get_content("warp.yaml.jinja")?;
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::RenderError;

/// Recognized template file extensions.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".jinja", ".jinja2", ".j2"];

/// Templates compiled into the crate, as `(name, content)` pairs.
pub const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "iterm.itermcolors.jinja",
        include_str!("../../templates/iterm.itermcolors.jinja"),
    ),
    ("warp.yaml.jinja", include_str!("../../templates/warp.yaml.jinja")),
    ("hyper.js.jinja", include_str!("../../templates/hyper.js.jinja")),
    ("kitty.conf.jinja", include_str!("../../templates/kitty.conf.jinja")),
    (
        "alacritty.toml.jinja",
        include_str!("../../templates/alacritty.toml.jinja"),
    ),
];

/// Named template sources, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, String>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the bundled templates.
    pub fn embedded() -> Self {
        let mut registry = Self::new();
        for (name, content) in EMBEDDED_TEMPLATES {
            registry.add_inline(*name, *content);
        }
        registry
    }

    /// Adds or replaces a template.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }

    /// Loads every template file directly inside `dir`, replacing same-named
    /// entries. Returns the number of files loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::IoError`] if the directory or one of its
    /// template files cannot be read.
    pub fn add_template_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, RenderError> {
        let dir = dir.as_ref();
        let mut loaded = 0;

        let mut entries = std::fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !is_template_name(name) {
                continue;
            }

            let content = std::fs::read_to_string(&path)?;
            let replaced = self.templates.insert(name.to_string(), content).is_some();
            tracing::debug!(
                template = name,
                path = %path.display(),
                replaced,
                "loaded template from disk"
            );
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Returns the source of a template.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateNotFound`] if no source is registered under `name`.
    pub fn get_content(&self, name: &str) -> Result<&str, RenderError> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::TemplateNotFound(name.to_string()))
    }

    /// Returns true if a template is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Iterates over `(name, content)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Template names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn is_template_name(name: &str) -> bool {
    TEMPLATE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
