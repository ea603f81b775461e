//! Folding attribute contributions into a single attribute set.
//!
//! [`Composite`] is the accumulator: it applies mappings in order, replacing
//! values for ordinary keys and merging paragraph styles property by property.
//! [`compose`] and the [`attributes!`](crate::attributes) macro build one from
//! a list of attributes and return the final mapping.
//!
//! # Example
//!
//! ```rust
//! use attributed::{compose, Color, Foreground, LineBreak, LineBreakMode, LineHeight};
//!
//! let attributes = compose(&[
//!     &Foreground::new(Color::RED),
//!     &LineHeight::new(20.0),
//!     &LineBreakMode::new(LineBreak::TruncatingTail),
//! ]);
//!
//! assert_eq!(attributes.len(), 2);
//! let paragraph = attributes.paragraph_style().unwrap();
//! assert_eq!(paragraph.minimum_line_height(), 20.0);
//! assert_eq!(paragraph.line_break_mode(), LineBreak::TruncatingTail);
//! ```

use tracing::{debug, trace};

use crate::attribute::Attribute;
use crate::paragraph::MergePolicy;
use crate::style::{Attributes, StyleKey, StyleValue};

/// Accumulates attribute mappings into one.
///
/// Each [`update`](Composite::update) applies one mapping:
///
/// - [`StyleKey::ParagraphStyle`]: if a paragraph style is already stored and
///   the incoming value is a paragraph style, the two are merged under the
///   composite's [`MergePolicy`]. If the stored value is absent (or not a
///   paragraph style) the incoming value is stored as is. An incoming value
///   of another shape over a stored paragraph style is skipped.
/// - Every other key: the incoming value replaces the stored one.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    attributes: Attributes,
    policy: MergePolicy,
}

impl Composite {
    /// Creates an empty composite using [`MergePolicy::Explicit`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty composite that merges paragraph styles with `policy`.
    pub fn with_policy(policy: MergePolicy) -> Self {
        Self {
            attributes: Attributes::new(),
            policy,
        }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Applies one mapping on top of the accumulated state.
    pub fn update(&mut self, attributes: Attributes) {
        for (key, value) in attributes {
            trace!(key = %key, kind = value.kind(), "applying attribute");
            if key.is_paragraph() {
                self.update_paragraph(value);
            } else {
                self.attributes.insert(key, value);
            }
        }
    }

    fn update_paragraph(&mut self, value: StyleValue) {
        let current = match self.attributes.get_mut(StyleKey::ParagraphStyle) {
            Some(StyleValue::Paragraph(current)) => current,
            _ => {
                self.attributes.insert(StyleKey::ParagraphStyle, value);
                return;
            }
        };

        match value {
            StyleValue::Paragraph(incoming) => current.absorb(&incoming, self.policy),
            other => {
                debug!(
                    kind = other.kind(),
                    "skipping non-paragraph value under the paragraph style key"
                );
            }
        }
    }

    /// Applies one attribute's contribution.
    pub fn push(&mut self, attribute: &dyn Attribute) {
        self.update(attribute.to_mapping());
    }

    /// Applies an attribute, returning the composite for chaining.
    ///
    /// ```rust
    /// use attributed::{Color, Composite, Foreground, Kern};
    ///
    /// let attributes = Composite::new()
    ///     .with(Foreground::new(Color::RED))
    ///     .with(Kern::new(1.0))
    ///     .with(Foreground::new(Color::BLUE))
    ///     .build();
    ///
    /// assert_eq!(attributes.foreground(), Some(Color::BLUE));
    /// assert_eq!(attributes.len(), 2);
    /// ```
    pub fn with(mut self, attribute: impl Attribute) -> Self {
        self.push(&attribute);
        self
    }

    /// The attributes accumulated so far.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Consumes the composite, returning the final attribute set.
    pub fn build(self) -> Attributes {
        self.attributes
    }
}

impl<A: Attribute> Extend<A> for Composite {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        for attribute in iter {
            self.push(&attribute);
        }
    }
}

/// Composes attributes in order with [`MergePolicy::Explicit`].
///
/// An empty slice yields an empty attribute set.
pub fn compose(segments: &[&dyn Attribute]) -> Attributes {
    compose_with(MergePolicy::default(), segments)
}

/// Composes attributes in order, merging paragraph styles with `policy`.
pub fn compose_with(policy: MergePolicy, segments: &[&dyn Attribute]) -> Attributes {
    let mut composite = Composite::with_policy(policy);
    for segment in segments {
        composite.push(*segment);
    }
    composite.build()
}

/// Composes a list of attributes into an [`Attributes`] set.
///
/// ```rust
/// use attributed::{attributes, Color, Foreground, LineBreak, LineBreakMode, LineHeight};
///
/// let attrs = attributes![
///     Foreground::new(Color::RED),
///     LineHeight::range(10.0, 30.0),
///     LineBreakMode::new(LineBreak::Clipping),
/// ];
/// assert_eq!(attrs.len(), 2);
///
/// let empty = attributes![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::Attributes::new()
    };
    ($($attribute:expr),+ $(,)?) => {
        $crate::compose(&[$(&$attribute as &dyn $crate::Attribute),+])
    };
}
