//! Color helpers exposed to templates.
//!
//! | Name | Kind | Input | Output |
//! |------|------|-------|--------|
//! | `decimalize` | filter + function | raw channel | `channel / 255` |
//! | `hex` | filter | `[r, g, b, a]` raw | `#rrggbb` |
//! | `hex_rgba` | filter | `[r, g, b, a]` raw | `#rrggbbaa` |
//! | `js_string` | filter | any string | quoted, escaped JS string literal |
//!
//! The color filters exist for custom templates that work from the raw
//! channels each target carries. `js_string` is for targets that embed
//! caller text in JavaScript source.

use minijinja::{Environment, Error, ErrorKind};

use crate::color::{to_fractional, to_hex_rgb, to_hex_rgba, Rgba};

/// Registers the color filters and functions on a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("decimalize", to_fractional);
    env.add_function("decimalize", to_fractional);

    env.add_filter("hex", |channels: Vec<f64>| -> Result<String, Error> {
        Ok(to_hex_rgb(&channels_to_rgba(&channels)?))
    });
    env.add_filter("hex_rgba", |channels: Vec<f64>| -> Result<String, Error> {
        Ok(to_hex_rgba(&channels_to_rgba(&channels)?))
    });
    env.add_filter("js_string", js_string);
}

/// Quotes `text` as a double-quoted JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so the serde_json encoding
/// escapes quotes, backslashes and control characters correctly.
pub fn js_string(text: &str) -> Result<String, Error> {
    serde_json::to_string(text)
        .map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))
}

fn channels_to_rgba(channels: &[f64]) -> Result<Rgba, Error> {
    match channels {
        [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
        _ => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected 4 color channels, got {}", channels.len()),
        )),
    }
}
