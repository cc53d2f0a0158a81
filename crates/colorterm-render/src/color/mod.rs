//! Color model: RGBA parsing and per-format encodings.
//!
//! - [`parse_rgba`] turns an `rgba(R, G, B, A)` token into an [`Rgba`]
//! - [`to_fractional`], [`to_hex_rgb`], [`to_hex_rgba`] encode it for a target
//!
//! See [`parse`] for the accepted grammar and [`encode`] for the 8-bit
//! truncation policy.

pub mod encode;
pub mod parse;

use std::fmt;
use std::str::FromStr;

pub use encode::{channel_to_u8, to_fractional, to_hex_rgb, to_hex_rgba, MAX_CHANNEL};
pub use parse::{parse_rgba, ColorParseError};

/// A parsed color.
///
/// `r`, `g` and `b` are in the raw 0–255 domain, `a` is a 0–1 fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `[r, g, b, a]` order, as parsed.
    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels with R, G and B moved to the 0–1 domain. Alpha is unchanged.
    pub fn fractional(&self) -> [f64; 4] {
        [
            to_fractional(self.r),
            to_fractional(self.g),
            to_fractional(self.b),
            self.a,
        ]
    }

    pub fn to_hex_rgb(&self) -> String {
        to_hex_rgb(self)
    }

    pub fn to_hex_rgba(&self) -> String {
        to_hex_rgba(self)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgba(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
