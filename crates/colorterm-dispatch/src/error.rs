//! Dispatch error type.

use colorterm_render::RenderError;

use crate::mode::Mode;
use crate::package::PackagingError;

/// Errors that abort a generate request.
///
/// The `Display` output carries full diagnostic detail and is meant for
/// server-side logs. Use [`public_message`](Self::public_message) for
/// anything sent back to an untrusted caller.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The requested mode is not one of the supported targets.
    #[error("unknown generate mode: {0:?}")]
    UnknownMode(String),

    /// Conversion or template rendering failed.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// The archive could not be assembled.
    #[error("packaging failed: {0}")]
    Packaging(#[from] PackagingError),

    /// No install guide is registered for a mode.
    #[error("no install guide for mode {0}")]
    MissingGuide(Mode),
}

impl DispatchError {
    /// True when the request itself was bad (unknown mode or unusable
    /// palette), as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            DispatchError::UnknownMode(_) => true,
            DispatchError::Render(err) => err.is_input_error(),
            DispatchError::Packaging(_) | DispatchError::MissingGuide(_) => false,
        }
    }

    /// A short message safe to show to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            DispatchError::UnknownMode(_) => "unknown generate mode",
            DispatchError::Render(err) if err.is_input_error() => "invalid color palette",
            _ => "internal server error",
        }
    }

    /// HTTP status code for a transport that wants one.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}
