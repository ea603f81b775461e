//! Color primitive used by foreground and background attributes.
//!
//! [`Color`] is a plain RGBA value, independent of any toolkit, so attribute
//! sets can be serialized and compared. Hosts convert it to their own color
//! type when applying the attributes.

mod error;

pub use error::ColorParseError;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An sRGB color with 8-bit channels and alpha.
///
/// # Example
///
/// ```rust
/// use attributed::Color;
///
/// let accent: Color = "#0078d4".parse().unwrap();
/// assert_eq!(accent, Color::rgb(0x00, 0x78, 0xd4));
/// assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if the color is fully transparent.
    pub fn is_clear(&self) -> bool {
        self.a == 0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let mut digits = Vec::with_capacity(hex.len());
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or_else(|| ColorParseError::InvalidDigit {
                input: s.to_string(),
                digit: c,
            })?;
            digits.push(digit as u8);
        }

        let pair = |i: usize| digits[i] * 16 + digits[i + 1];
        match digits.len() {
            3 => Ok(Color::rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Color::rgb(pair(0), pair(2), pair(4))),
            8 => Ok(Color::rgba(pair(0), pair(2), pair(4), pair(6))),
            _ => Err(ColorParseError::InvalidLength {
                input: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
