//! Style keys.

use serde::{Deserialize, Serialize};

/// Names one styling dimension of an attribute set.
///
/// Each key appears at most once in an [`Attributes`](super::Attributes)
/// mapping. [`StyleKey::ParagraphStyle`] is the only key whose values are
/// merged when they collide; every other key is last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StyleKey {
    ForegroundColor,
    BackgroundColor,
    ParagraphStyle,
    /// Extra spacing between characters, in points.
    Kern,
    Underline,
    Strikethrough,
}

impl StyleKey {
    /// Returns `true` for the key whose values are merged instead of replaced.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, StyleKey::ParagraphStyle)
    }

    /// The snake_case name used in serialized attribute sets.
    pub fn name(&self) -> &'static str {
        match self {
            StyleKey::ForegroundColor => "foreground_color",
            StyleKey::BackgroundColor => "background_color",
            StyleKey::ParagraphStyle => "paragraph_style",
            StyleKey::Kern => "kern",
            StyleKey::Underline => "underline",
            StyleKey::Strikethrough => "strikethrough",
        }
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
