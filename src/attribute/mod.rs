//! Attribute values: single styling intents that compose into [`Attributes`].
//!
//! Every attribute contributes exactly one entry. Character-level attributes
//! ([`Foreground`], [`Kern`], ...) are replaced by later contributions for the
//! same key. Paragraph-level attributes ([`LineHeight`], [`LineBreakMode`], ...)
//! all contribute a partial [`ParagraphStyle`](crate::ParagraphStyle) under
//! [`StyleKey::ParagraphStyle`] and are merged property by property.
//!
//! New attributes need no registration: implement [`Attribute`] and pass the
//! value to [`compose`](crate::compose).

mod paragraph;
mod text;

pub use paragraph::{
    Alignment, BaseWritingDirection, Indent, LineBreakMode, LineHeight, LineSpacing, Paragraph,
    ParagraphSpacing,
};
pub use text::{Background, Foreground, Kern, Strikethrough, Underline};

use crate::style::{Attributes, StyleKey, StyleValue};

/// A styling intent that contributes one entry to an attribute set.
///
/// # Example
///
/// ```rust
/// use attributed::{Attribute, Attributes, Color, StyleKey, StyleValue};
///
/// struct Highlight;
///
/// impl Attribute for Highlight {
///     fn entry(&self) -> (StyleKey, StyleValue) {
///         (StyleKey::BackgroundColor, Color::YELLOW.into())
///     }
/// }
///
/// let mapping = Highlight.to_mapping();
/// assert_eq!(mapping.background(), Some(Color::YELLOW));
/// ```
pub trait Attribute {
    /// The key and value this attribute contributes.
    fn entry(&self) -> (StyleKey, StyleValue);

    /// The contribution as a single-entry mapping.
    fn to_mapping(&self) -> Attributes {
        let (key, value) = self.entry();
        Attributes::single(key, value)
    }
}

impl<A: Attribute + ?Sized> Attribute for &A {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (**self).entry()
    }
}

impl<A: Attribute + ?Sized> Attribute for Box<A> {
    fn entry(&self) -> (StyleKey, StyleValue) {
        (**self).entry()
    }
}
