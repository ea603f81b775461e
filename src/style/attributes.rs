//! The attribute mapping shared by every component.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::key::StyleKey;
use super::value::StyleValue;
use crate::color::Color;
use crate::paragraph::ParagraphStyle;

/// A mapping from [`StyleKey`] to [`StyleValue`] with unique keys.
///
/// Iteration follows key order, so equal mappings always debug-print and
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl Attributes {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping holding a single entry.
    pub fn single(key: StyleKey, value: impl Into<StyleValue>) -> Self {
        let mut attributes = Self::new();
        attributes.insert(key, value);
        attributes
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.entries.get(&key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.entries.insert(key, value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: StyleKey) -> Option<StyleValue> {
        self.entries.remove(&key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, StyleKey, StyleValue> {
        self.entries.iter()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = StyleKey> + '_ {
        self.entries.keys().copied()
    }

    pub(crate) fn get_mut(&mut self, key: StyleKey) -> Option<&mut StyleValue> {
        self.entries.get_mut(&key)
    }

    /// The paragraph descriptor, if one is stored under the paragraph key.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        self.get(StyleKey::ParagraphStyle)
            .and_then(StyleValue::as_paragraph)
    }

    /// The foreground color, if one is stored.
    pub fn foreground(&self) -> Option<Color> {
        self.get(StyleKey::ForegroundColor)
            .and_then(StyleValue::as_color)
    }

    /// The background color, if one is stored.
    pub fn background(&self) -> Option<Color> {
        self.get(StyleKey::BackgroundColor)
            .and_then(StyleValue::as_color)
    }
}

impl IntoIterator for Attributes {
    type Item = (StyleKey, StyleValue);
    type IntoIter = btree_map::IntoIter<StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a StyleKey, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(StyleKey, StyleValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
