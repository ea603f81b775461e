//! Enumerations carried by paragraph style properties.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of lines within a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    Right,
    Center,
    Justified,
    /// Left for left-to-right text, right for right-to-left text.
    #[default]
    Natural,
}

/// How lines that do not fit the available width are broken or shortened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreak {
    /// Wrap at word boundaries, falling back to characters for long words.
    #[default]
    WordWrapping,
    /// Wrap at any character.
    CharWrapping,
    /// Cut the line at the edge without an ellipsis.
    Clipping,
    /// Keep the end of the line, replacing the start with an ellipsis.
    TruncatingHead,
    /// Keep the start of the line, replacing the end with an ellipsis.
    TruncatingTail,
    /// Keep both ends, replacing the middle with an ellipsis.
    TruncatingMiddle,
}

impl LineBreak {
    /// Returns `true` for modes that produce multiple lines.
    pub fn wraps(&self) -> bool {
        matches!(self, LineBreak::WordWrapping | LineBreak::CharWrapping)
    }
}

/// Base writing direction of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingDirection {
    /// Derived from the text content.
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

/// A tab stop at a fixed location, in points from the leading margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    pub alignment: TextAlignment,
    pub location: f64,
}

impl TabStop {
    pub fn new(alignment: TextAlignment, location: f64) -> Self {
        Self {
            alignment,
            location,
        }
    }
}

/// Twelve left-aligned stops every 28 points.
pub(crate) fn default_tab_stops() -> Vec<TabStop> {
    (1..=12)
        .map(|i| TabStop::new(TextAlignment::Left, 28.0 * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TextAlignment::default(), TextAlignment::Natural);
        assert_eq!(LineBreak::default(), LineBreak::WordWrapping);
        assert_eq!(WritingDirection::default(), WritingDirection::Natural);
    }

    #[test]
    fn test_line_break_wraps() {
        assert!(LineBreak::WordWrapping.wraps());
        assert!(LineBreak::CharWrapping.wraps());
        assert!(!LineBreak::TruncatingTail.wraps());
        assert!(!LineBreak::Clipping.wraps());
    }

    #[test]
    fn test_default_tab_stops() {
        let stops = default_tab_stops();
        assert_eq!(stops.len(), 12);
        assert_eq!(stops[0].location, 28.0);
        assert_eq!(stops[11].location, 336.0);
        assert!(stops.iter().all(|s| s.alignment == TextAlignment::Left));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LineBreak::TruncatingTail).unwrap();
        assert_eq!(json, "\"truncating_tail\"");
    }
}
