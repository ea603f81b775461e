//! Paragraph styles and their field-wise merge.
//!
//! - [`ParagraphStyle`]: sixteen independent paragraph properties, each
//!   either explicitly set or falling back to the platform default
//! - [`ParagraphProperty`]: names a single property for presence queries
//! - [`merge`] / [`merge_with`]: combine two descriptors property by property
//! - [`MergePolicy`]: what counts as "set" on the overriding descriptor
//!
//! Paragraph formatting is the one place where attributes are merged rather
//! than replaced: a line height from one attribute and a line-break mode from
//! another must end up in the same descriptor.

mod merge;
mod style;
mod types;

pub use merge::{merge, merge_with, MergePolicy};
pub use style::{ParagraphProperty, ParagraphStyle};
pub use types::{LineBreak, TabStop, TextAlignment, WritingDirection};
