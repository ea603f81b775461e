//! Paragraph-level attributes.
//!
//! Each attribute produces a [`ParagraphStyle`] with only its own properties
//! set; everything else is left unset so that merging keeps what earlier
//! attributes contributed.

use super::Attribute;
use crate::paragraph::{LineBreak, ParagraphStyle, TextAlignment, WritingDirection};
use crate::style::{StyleKey, StyleValue};

fn paragraph_entry(style: ParagraphStyle) -> (StyleKey, StyleValue) {
    (StyleKey::ParagraphStyle, StyleValue::Paragraph(style))
}

/// Constrains line height to a range.
///
/// # Example
///
/// ```rust
/// use attributed::{Attribute, LineHeight};
///
/// let mapping = LineHeight::new(20.0).to_mapping();
/// let style = mapping.paragraph_style().unwrap();
/// assert_eq!(style.minimum_line_height(), 20.0);
/// assert_eq!(style.maximum_line_height(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHeight {
    pub minimum: f64,
    pub maximum: f64,
}

impl LineHeight {
    /// A fixed line height, used as both minimum and maximum.
    pub fn new(height: f64) -> Self {
        Self::range(height, height)
    }

    pub fn range(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }
}

impl Attribute for LineHeight {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(
            ParagraphStyle::new()
                .with_minimum_line_height(self.minimum)
                .with_maximum_line_height(self.maximum),
        )
    }
}

/// Sets how lines that overflow the available width are handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBreakMode(pub LineBreak);

impl LineBreakMode {
    pub fn new(mode: LineBreak) -> Self {
        Self(mode)
    }
}

impl Attribute for LineBreakMode {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(ParagraphStyle::new().with_line_break_mode(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment(pub TextAlignment);

impl Alignment {
    pub fn new(alignment: TextAlignment) -> Self {
        Self(alignment)
    }
}

impl Attribute for Alignment {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(ParagraphStyle::new().with_alignment(self.0))
    }
}

/// Extra space between lines, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpacing(pub f64);

impl LineSpacing {
    pub fn new(points: f64) -> Self {
        Self(points)
    }
}

impl Attribute for LineSpacing {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(ParagraphStyle::new().with_line_spacing(self.0))
    }
}

/// Space before and/or after the paragraph. Sides left as `None` stay unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphSpacing {
    pub before: Option<f64>,
    pub after: Option<f64>,
}

impl ParagraphSpacing {
    pub fn new(before: f64, after: f64) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    pub fn before(points: f64) -> Self {
        Self {
            before: Some(points),
            after: None,
        }
    }

    pub fn after(points: f64) -> Self {
        Self {
            before: None,
            after: Some(points),
        }
    }
}

impl Attribute for ParagraphSpacing {
    fn entry(&self) -> (StyleKey, StyleValue) {
        let mut style = ParagraphStyle::new();
        if let Some(before) = self.before {
            style = style.with_paragraph_spacing_before(before);
        }
        if let Some(after) = self.after {
            style = style.with_paragraph_spacing(after);
        }
        paragraph_entry(style)
    }
}

/// Paragraph indentation. Only the sides that were given are set.
///
/// ```rust
/// use attributed::{Attribute, Indent};
///
/// let mapping = Indent::new().first_line(16.0).head(8.0).to_mapping();
/// let style = mapping.paragraph_style().unwrap();
/// assert_eq!(style.first_line_head_indent(), 16.0);
/// assert_eq!(style.head_indent(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Indent {
    first_line: Option<f64>,
    head: Option<f64>,
    tail: Option<f64>,
}

impl Indent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_line(mut self, points: f64) -> Self {
        self.first_line = Some(points);
        self
    }

    pub fn head(mut self, points: f64) -> Self {
        self.head = Some(points);
        self
    }

    pub fn tail(mut self, points: f64) -> Self {
        self.tail = Some(points);
        self
    }
}

impl Attribute for Indent {
    fn entry(&self) -> (StyleKey, StyleValue) {
        let mut style = ParagraphStyle::new();
        if let Some(points) = self.first_line {
            style = style.with_first_line_head_indent(points);
        }
        if let Some(points) = self.head {
            style = style.with_head_indent(points);
        }
        if let Some(points) = self.tail {
            style = style.with_tail_indent(points);
        }
        paragraph_entry(style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseWritingDirection(pub WritingDirection);

impl BaseWritingDirection {
    pub fn new(direction: WritingDirection) -> Self {
        Self(direction)
    }
}

impl Attribute for BaseWritingDirection {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(ParagraphStyle::new().with_base_writing_direction(self.0))
    }
}

/// Contributes a complete paragraph descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph(pub ParagraphStyle);

impl Paragraph {
    pub fn new(style: ParagraphStyle) -> Self {
        Self(style)
    }
}

impl Attribute for Paragraph {
    fn entry(&self) -> (StyleKey, StyleValue) {
        paragraph_entry(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::ParagraphProperty;

    fn style_of(attribute: &dyn Attribute) -> ParagraphStyle {
        match attribute.entry() {
            (StyleKey::ParagraphStyle, StyleValue::Paragraph(style)) => style,
            other => panic!("expected paragraph entry, got {:?}", other),
        }
    }

    #[test]
    fn test_line_height_single_value() {
        let style = style_of(&LineHeight::new(20.0));
        assert_eq!(style.minimum_line_height(), 20.0);
        assert_eq!(style.maximum_line_height(), 20.0);
        assert_eq!(style.explicit_properties().count(), 2);
    }

    #[test]
    fn test_line_height_range() {
        let style = style_of(&LineHeight::range(10.0, 30.0));
        assert_eq!(style.minimum_line_height(), 10.0);
        assert_eq!(style.maximum_line_height(), 30.0);
    }

    #[test]
    fn test_line_break_mode_sets_only_mode() {
        let style = style_of(&LineBreakMode::new(LineBreak::TruncatingTail));
        assert_eq!(style.line_break_mode(), LineBreak::TruncatingTail);
        assert_eq!(
            style.explicit_properties().collect::<Vec<_>>(),
            vec![ParagraphProperty::LineBreakMode]
        );
    }

    #[test]
    fn test_alignment_and_spacing() {
        assert_eq!(
            style_of(&Alignment::new(TextAlignment::Center)).alignment(),
            TextAlignment::Center
        );
        assert_eq!(style_of(&LineSpacing::new(4.0)).line_spacing(), 4.0);
    }

    #[test]
    fn test_paragraph_spacing_sides() {
        let after = style_of(&ParagraphSpacing::after(6.0));
        assert_eq!(after.paragraph_spacing(), 6.0);
        assert!(!after.is_set(ParagraphProperty::ParagraphSpacingBefore));

        let both = style_of(&ParagraphSpacing::new(2.0, 6.0));
        assert_eq!(both.paragraph_spacing_before(), 2.0);
        assert_eq!(both.paragraph_spacing(), 6.0);
    }

    #[test]
    fn test_indent_sets_given_sides() {
        let style = style_of(&Indent::new().tail(-10.0));
        assert_eq!(style.tail_indent(), -10.0);
        assert!(!style.is_set(ParagraphProperty::HeadIndent));
        assert!(!style.is_set(ParagraphProperty::FirstLineHeadIndent));
    }

    #[test]
    fn test_writing_direction() {
        let style = style_of(&BaseWritingDirection::new(WritingDirection::RightToLeft));
        assert_eq!(style.base_writing_direction(), WritingDirection::RightToLeft);
    }

    #[test]
    fn test_paragraph_passes_descriptor_through() {
        let descriptor = ParagraphStyle::new().with_hyphenation_factor(0.5);
        assert_eq!(style_of(&Paragraph::new(descriptor.clone())), descriptor);
    }
}
