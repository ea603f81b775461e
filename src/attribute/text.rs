//! Character-level attributes.

use super::Attribute;
use crate::color::Color;
use crate::style::{LineStyle, StyleKey, StyleValue};

/// Sets the text color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foreground(pub Color);

impl Foreground {
    pub fn new(color: Color) -> Self {
        Self(color)
    }
}

impl Attribute for Foreground {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (StyleKey::ForegroundColor, self.0.into())
    }
}

/// Sets the color painted behind the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background(pub Color);

impl Background {
    pub fn new(color: Color) -> Self {
        Self(color)
    }
}

impl Attribute for Background {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (StyleKey::BackgroundColor, self.0.into())
    }
}

/// Adds spacing between characters, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kern(pub f64);

impl Kern {
    pub fn new(points: f64) -> Self {
        Self(points)
    }
}

impl Attribute for Kern {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (StyleKey::Kern, self.0.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underline(pub LineStyle);

impl Underline {
    pub fn new(style: LineStyle) -> Self {
        Self(style)
    }
}

impl Default for Underline {
    fn default() -> Self {
        Self(LineStyle::Single)
    }
}

impl Attribute for Underline {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (StyleKey::Underline, self.0.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strikethrough(pub LineStyle);

impl Strikethrough {
    pub fn new(style: LineStyle) -> Self {
        Self(style)
    }
}

impl Default for Strikethrough {
    fn default() -> Self {
        Self(LineStyle::Single)
    }
}

impl Attribute for Strikethrough {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (StyleKey::Strikethrough, self.0.into())
    }
}
