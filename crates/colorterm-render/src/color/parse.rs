//! RGBA token parsing.
//!
//! Palette colors arrive as CSS-style `rgba(R, G, B, A)` strings. The grammar
//! is deliberately narrow:
//!
//! - The whole token must match; no leading or trailing text.
//! - Exactly four components, separated by commas. Whitespace is tolerated
//!   after a comma and nowhere else.
//! - R, G and B are unsigned integers, A is an unsigned decimal.
//!
//! Values are not clamped. `rgba(300, 0, 0, 1)` parses to a red channel of
//! `300.0`; deciding what that means for an 8-bit target is the encoder's job
//! (see [`super::encode::channel_to_u8`]).
//!
//! Note the domain asymmetry in the result: R, G and B stay in the raw 0–255
//! domain while A is already a 0–1 fraction. Alpha is never multiplied or
//! divided by 255.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Rgba;

/// Pattern for a complete `rgba(...)` token.
///
/// `\d` is Unicode-aware, so digits from other scripts get past the pattern
/// and are rejected by the numeric conversion instead.
static RGBA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba\((\d+),\s*(\d+),\s*(\d+),\s*([\d.]+)\)$").expect("rgba pattern compiles")
});

const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Error returned when an RGBA token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The token does not have the `rgba(R, G, B, A)` shape.
    #[error("invalid RGBA string: {0:?}")]
    Malformed(String),

    /// A component matched the pattern but is not a finite `f64`.
    #[error("invalid {channel} component {value:?} in RGBA string")]
    NumericOverflow {
        /// Channel name (`red`, `green`, `blue` or `alpha`).
        channel: &'static str,
        /// The offending component text.
        value: String,
    },
}

/// Parses an `rgba(R, G, B, A)` token.
///
/// # Example
///
/// ```rust
/// use colorterm_render::color::parse_rgba;
///
/// let color = parse_rgba("rgba(255, 0, 128, 0.5)").unwrap();
/// assert_eq!(color.channels(), [255.0, 0.0, 128.0, 0.5]);
///
/// assert!(parse_rgba("rgba(1, 2, 3)").is_err());
/// ```
pub fn parse_rgba(token: &str) -> Result<Rgba, ColorParseError> {
    let captures = RGBA_PATTERN
        .captures(token)
        .ok_or_else(|| ColorParseError::Malformed(token.to_string()))?;

    let mut channels = [0.0f64; 4];
    for (i, channel) in channels.iter_mut().enumerate() {
        let text = captures
            .get(i + 1)
            .ok_or_else(|| ColorParseError::Malformed(token.to_string()))?
            .as_str();
        *channel = text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ColorParseError::NumericOverflow {
                channel: CHANNEL_NAMES[i],
                value: text.to_string(),
            })?;
    }

    Ok(Rgba::new(channels[0], channels[1], channels[2], channels[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Accepted shapes
    // =========================================================================

    #[test]
    fn test_parse_spaced_token() {
        let c = parse_rgba("rgba(255, 0, 128, 1.0)").unwrap();
        assert_eq!(c.channels(), [255.0, 0.0, 128.0, 1.0]);
    }

    #[test]
    fn test_parse_compact_token() {
        let c = parse_rgba("rgba(10,20,30,1)").unwrap();
        assert_eq!(c.channels(), [10.0, 20.0, 30.0, 1.0]);
    }

    #[test]
    fn test_parse_fractional_alpha() {
        let c = parse_rgba("rgba(0, 0, 0, 0.25)").unwrap();
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn test_parse_alpha_with_leading_dot() {
        let c = parse_rgba("rgba(0, 0, 0, .5)").unwrap();
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_parse_does_not_clamp() {
        let c = parse_rgba("rgba(300, 0, 999, 2)").unwrap();
        assert_eq!(c.r, 300.0);
        assert_eq!(c.b, 999.0);
        assert_eq!(c.a, 2.0);
    }

    // =========================================================================
    // Malformed tokens
    // =========================================================================

    #[test]
    fn test_three_components_is_malformed() {
        assert_eq!(
            parse_rgba("rgba(1,2,3)"),
            Err(ColorParseError::Malformed("rgba(1,2,3)".into()))
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            parse_rgba("not-a-color"),
            Err(ColorParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_surrounding_text_is_malformed() {
        assert!(parse_rgba(" rgba(1, 2, 3, 1)").is_err());
        assert!(parse_rgba("rgba(1, 2, 3, 1) ").is_err());
        assert!(parse_rgba("xrgba(1, 2, 3, 1)").is_err());
    }

    #[test]
    fn test_other_notations_are_malformed() {
        assert!(parse_rgba("rgb(1, 2, 3)").is_err());
        assert!(parse_rgba("#ff0080").is_err());
        assert!(parse_rgba("RGBA(1, 2, 3, 1)").is_err());
        assert!(parse_rgba("rgba(1, 2, 3, 1, 5)").is_err());
    }

    #[test]
    fn test_signed_or_decimal_channels_are_malformed() {
        assert!(parse_rgba("rgba(-1, 2, 3, 1)").is_err());
        assert!(parse_rgba("rgba(1.5, 2, 3, 1)").is_err());
        assert!(parse_rgba("rgba(1, 2, 3, -1)").is_err());
    }

    #[test]
    fn test_whitespace_before_comma_is_malformed() {
        assert!(parse_rgba("rgba(1 , 2, 3, 1)").is_err());
    }

    // =========================================================================
    // Numeric conversion failures
    // =========================================================================

    #[test]
    fn test_alpha_with_two_dots_fails_conversion() {
        assert_eq!(
            parse_rgba("rgba(1, 2, 3, 1.2.3)"),
            Err(ColorParseError::NumericOverflow {
                channel: "alpha",
                value: "1.2.3".into(),
            })
        );
    }

    #[test]
    fn test_lone_dot_alpha_fails_conversion() {
        assert!(matches!(
            parse_rgba("rgba(1, 2, 3, .)"),
            Err(ColorParseError::NumericOverflow { channel: "alpha", .. })
        ));
    }

    #[test]
    fn test_non_ascii_digits_fail_conversion() {
        // Arabic-Indic digit one matches `\d` but is not a Rust float literal.
        assert!(matches!(
            parse_rgba("rgba(\u{0661}, 2, 3, 1)"),
            Err(ColorParseError::NumericOverflow { channel: "red", .. })
        ));
    }

    #[test]
    fn test_overlong_channel_is_numeric_overflow() {
        let digits = "9".repeat(400);
        let token = format!("rgba({digits}, 0, 0, 1)");
        assert_eq!(
            parse_rgba(&token),
            Err(ColorParseError::NumericOverflow {
                channel: "red",
                value: digits,
            })
        );
    }

    #[test]
    fn test_overlong_alpha_is_numeric_overflow() {
        let token = format!("rgba(0, 0, 0, {}.5)", "1".repeat(320));
        assert!(matches!(
            parse_rgba(&token),
            Err(ColorParseError::NumericOverflow { channel: "alpha", .. })
        ));
    }

    #[test]
    fn test_error_display_names_token() {
        let err = parse_rgba("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
