//! Channel encodings used by terminal theme formats.
//!
//! Two numeric domains meet here:
//!
//! | Domain | Range | Used by |
//! |--------|-------|---------|
//! | raw | 0–255 | parsed R/G/B, hex output |
//! | fractional | 0–1 | parsed A, iTerm2 `<real>` components |
//!
//! # 8-bit conversion
//!
//! Every hex encoder goes through [`channel_to_u8`]: the value is truncated
//! toward zero and then wrapped modulo 256. Rounding never happens, so
//! `127.9` encodes as `7f`. Out-of-range channels wrap rather than saturate:
//! `256` becomes `00` and `300` becomes `2c`. The same rule applies to alpha
//! after it is scaled by 255.
//!
//! Alpha written as an opacity (kitty `background_opacity`, Alacritty
//! `window.opacity`) is clamped to `0.0..=1.0` instead, since those fields
//! reject anything outside it.

use super::Rgba;

/// Upper bound of the raw channel domain.
pub const MAX_CHANNEL: f64 = 255.0;

/// Converts a raw 0–255 channel into the fractional 0–1 domain.
///
/// ```rust
/// use colorterm_render::color::to_fractional;
///
/// assert_eq!(to_fractional(255.0), 1.0);
/// assert_eq!(to_fractional(0.0), 0.0);
/// ```
pub fn to_fractional(channel: f64) -> f64 {
    channel / MAX_CHANNEL
}

/// Truncates a raw channel into an 8-bit value, wrapping modulo 256.
///
/// Negative, NaN and infinite inputs map to zero. The wrap is exact for any
/// finite value, including ones beyond `u64::MAX`.
pub fn channel_to_u8(value: f64) -> u8 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `%` on f64 is exact, so the remainder is an integer in 0..256.
    (value.trunc() % 256.0) as u8
}

/// Encodes a color as lowercase `#rrggbb`, dropping alpha.
///
/// ```rust
/// use colorterm_render::color::{parse_rgba, to_hex_rgb};
///
/// let color = parse_rgba("rgba(255, 0, 128, 1.0)").unwrap();
/// assert_eq!(to_hex_rgb(&color), "#ff0080");
/// ```
pub fn to_hex_rgb(color: &Rgba) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_u8(color.r),
        channel_to_u8(color.g),
        channel_to_u8(color.b)
    )
}

/// Encodes a color as lowercase `#rrggbbaa`.
///
/// Alpha is fractional, so it is scaled by 255 and floored before the 8-bit
/// conversion.
pub fn to_hex_rgba(color: &Rgba) -> String {
    format!(
        "{}{:02x}",
        to_hex_rgb(color),
        channel_to_u8((color.a * MAX_CHANNEL).floor())
    )
}
