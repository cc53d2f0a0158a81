//! Error types for theme rendering.
//!
//! [`RenderError`] covers everything between a received palette and a
//! rendered document: color problems (bad input) and template problems
//! (misconfiguration). It hides the template engine's own error type.

use std::fmt;

use crate::color::ColorParseError;

/// Error type for conversion and rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// A required palette role was not supplied.
    MissingColor(String),

    /// A palette role held an unparseable RGBA token.
    Color {
        role: String,
        source: ColorParseError,
    },

    /// Template syntax error or evaluation failure.
    TemplateError(String),

    /// Template not found in the registry.
    TemplateNotFound(String),

    /// Target state could not be serialized for the template.
    SerializationError(String),

    /// I/O error (e.g., reading a template override from disk).
    IoError(std::io::Error),

    /// Other operational error.
    OperationError(String),
}

impl RenderError {
    /// True when the error was caused by the caller's palette rather than
    /// by server-side configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, RenderError::MissingColor(_) | RenderError::Color { .. })
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingColor(role) => write!(f, "missing color: {}", role),
            RenderError::Color { role, source } => write!(f, "color '{}': {}", role, source),
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Color { source, .. } => Some(source),
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}
