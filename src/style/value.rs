//! Style values.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::paragraph::ParagraphStyle;

/// Line decoration used by underline and strikethrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    None,
    Single,
    Thick,
    Double,
}

impl LineStyle {
    pub fn is_visible(&self) -> bool {
        !matches!(self, LineStyle::None)
    }
}

/// The value stored under a [`StyleKey`](super::StyleKey).
///
/// Values are a closed set of shapes. Which shape a key expects is a
/// convention of the attribute that produced it; a mismatched shape under
/// the paragraph key is skipped during composition rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    Color(Color),
    Paragraph(ParagraphStyle),
    Number(f64),
    Flag(bool),
    Line(LineStyle),
}

impl StyleValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphStyle> {
        match self {
            StyleValue::Paragraph(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StyleValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<LineStyle> {
        match self {
            StyleValue::Line(line) => Some(*line),
            _ => None,
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Color(_) => "color",
            StyleValue::Paragraph(_) => "paragraph",
            StyleValue::Number(_) => "number",
            StyleValue::Flag(_) => "flag",
            StyleValue::Line(_) => "line",
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<ParagraphStyle> for StyleValue {
    fn from(style: ParagraphStyle) -> Self {
        StyleValue::Paragraph(style)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<bool> for StyleValue {
    fn from(flag: bool) -> Self {
        StyleValue::Flag(flag)
    }
}

impl From<LineStyle> for StyleValue {
    fn from(line: LineStyle) -> Self {
        StyleValue::Line(line)
    }
}
