//! A string paired with the attributes applied to its full length.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::compose::compose;
use crate::style::{Attributes, StyleKey, StyleValue};

/// Text with one attribute set covering the whole string.
///
/// # Example
///
/// ```rust
/// use attributed::{AttributedString, Color, Foreground, LineHeight};
///
/// let label = AttributedString::build(
///     "Ready",
///     &[&Foreground::new(Color::GREEN), &LineHeight::new(18.0)],
/// );
///
/// assert_eq!(label.text(), "Ready");
/// assert_eq!(label.attributes().foreground(), Some(Color::GREEN));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributedString {
    text: String,
    attributes: Attributes,
}

impl AttributedString {
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Creates a string with no attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Attributes::new())
    }

    /// Composes `segments` and applies the result to `text`.
    pub fn build(text: impl Into<String>, segments: &[&dyn Attribute]) -> Self {
        Self::new(text, compose(segments))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Sets `key` over the whole string, replacing any existing value.
    ///
    /// Unlike composition this never merges, including for the paragraph key.
    pub fn add_attribute(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.attributes.insert(key, value);
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_parts(self) -> (String, Attributes) {
        (self.text, self.attributes)
    }
}

impl std::fmt::Display for AttributedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
