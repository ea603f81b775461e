//! # Attributed - declarative rich-text attribute composition
//!
//! Attributed builds the attribute set applied to a string from a list of
//! small, independent styling intents. Each intent ([`Foreground`],
//! [`LineHeight`], [`LineBreakMode`], ...) contributes one entry; the
//! entries are folded in order into a single [`Attributes`] mapping.
//!
//! ## Composition rules
//!
//! - Ordinary keys are last-write-wins: `Foreground(red)` followed by
//!   `Foreground(blue)` yields blue.
//! - Paragraph styles are merged property by property: a line height from one
//!   attribute and a line-break mode from another end up in the same
//!   [`ParagraphStyle`]. When both set the same property, the later one wins.
//!
//! ```rust
//! use attributed::{attributes, Color, Foreground, LineBreak, LineBreakMode, LineHeight};
//!
//! let attrs = attributes![
//!     Foreground::new(Color::RED),
//!     LineHeight::new(20.0),
//!     LineBreakMode::new(LineBreak::TruncatingTail),
//!     Foreground::new(Color::BLUE),
//! ];
//!
//! assert_eq!(attrs.foreground(), Some(Color::BLUE));
//! let paragraph = attrs.paragraph_style().unwrap();
//! assert_eq!(paragraph.maximum_line_height(), 20.0);
//! assert_eq!(paragraph.line_break_mode(), LineBreak::TruncatingTail);
//! ```
//!
//! ## Merge policy
//!
//! Paragraph properties are optional: a property counts as set once a
//! `with_*` setter was called, even if the value equals the default. The
//! older rule, where only values different from the default override, is
//! available as [`MergePolicy::DifferentFromDefault`] through
//! [`compose_with`] or [`Composite::with_policy`].
//!
//! ## Output
//!
//! [`AttributedString`] pairs text with a composed set. Displaying it is left
//! to the host's text system; this crate only computes the mapping.
//!
//! ## Diagnostics
//!
//! Composition never fails. A value of the wrong shape under the paragraph
//! key is skipped and reported through [`tracing`] at debug level.

pub mod attribute;
pub mod color;
pub mod compose;
pub mod paragraph;
pub mod string;
pub mod style;

pub use attribute::{
    Alignment, Attribute, Background, BaseWritingDirection, Foreground, Indent, Kern,
    LineBreakMode, LineHeight, LineSpacing, Paragraph, ParagraphSpacing, Strikethrough, Underline,
};
pub use color::{Color, ColorParseError};
pub use compose::{compose, compose_with, Composite};
pub use paragraph::{
    merge, merge_with, LineBreak, MergePolicy, ParagraphProperty, ParagraphStyle, TabStop,
    TextAlignment, WritingDirection,
};
pub use string::AttributedString;
pub use style::{Attributes, LineStyle, StyleKey, StyleValue};
