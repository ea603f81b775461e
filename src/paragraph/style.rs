//! The paragraph style descriptor.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::merge::MergePolicy;
use super::types::{default_tab_stops, LineBreak, TabStop, TextAlignment, WritingDirection};

// Generates `ParagraphProperty`, `ParagraphStyle` with one optional field per
// property, the shared defaults table, and the per-field accessors.
macro_rules! paragraph_properties {
    ($(
        $(#[$doc:meta])*
        $variant:ident => $field:ident, $setter:ident: $ty:ty = $default:expr;
    )+) => {
        /// Names one property of a [`ParagraphStyle`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ParagraphProperty {
            $( $variant, )+
        }

        impl ParagraphProperty {
            /// Every paragraph property, in declaration order.
            pub const ALL: &'static [ParagraphProperty] = &[$( ParagraphProperty::$variant, )+];
        }

        /// A bundle of paragraph-level formatting properties.
        ///
        /// Every property is either explicitly set or unset. Getters return
        /// the explicit value when present and the platform default
        /// otherwise, so an empty descriptor behaves like the default
        /// paragraph style. Presence is what drives
        /// [`merge`](crate::merge()): an explicitly set property on
        /// the override always wins, even when it equals the default.
        ///
        /// # Example
        ///
        /// ```rust
        /// use attributed::{LineBreak, ParagraphProperty, ParagraphStyle};
        ///
        /// let style = ParagraphStyle::new()
        ///     .with_minimum_line_height(20.0)
        ///     .with_line_break_mode(LineBreak::TruncatingTail);
        ///
        /// assert_eq!(style.minimum_line_height(), 20.0);
        /// assert!(style.is_set(ParagraphProperty::LineBreakMode));
        /// assert!(!style.is_set(ParagraphProperty::Alignment));
        /// ```
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ParagraphStyle {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )+
        }

        struct Defaults {
            $( $field: $ty, )+
        }

        static DEFAULTS: Lazy<Defaults> = Lazy::new(|| Defaults {
            $( $field: $default, )+
        });

        impl ParagraphStyle {
            $(
                $(#[$doc])*
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| DEFAULTS.$field.clone())
                }

                pub fn $setter(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )+

            /// Returns `true` if the property was explicitly set.
            pub fn is_set(&self, property: ParagraphProperty) -> bool {
                match property {
                    $( ParagraphProperty::$variant => self.$field.is_some(), )+
                }
            }

            /// Returns the property to its unset state.
            pub fn unset(&mut self, property: ParagraphProperty) {
                match property {
                    $( ParagraphProperty::$variant => self.$field = None, )+
                }
            }

            /// Returns a copy with every property explicitly set to its
            /// effective value.
            pub fn resolved(&self) -> Self {
                Self {
                    $( $field: Some(self.$field()), )+
                }
            }

            /// Copies the properties `over` contributes under `policy`.
            pub(crate) fn absorb(&mut self, over: &ParagraphStyle, policy: MergePolicy) {
                $(
                    if let Some(value) = &over.$field {
                        if policy.takes(value, &DEFAULTS.$field) {
                            self.$field = Some(value.clone());
                        }
                    }
                )+
            }
        }
    };
}

paragraph_properties! {
    /// Extra space between lines, in points.
    LineSpacing => line_spacing, with_line_spacing: f64 = 0.0;
    /// Space after the paragraph, in points.
    ParagraphSpacing => paragraph_spacing, with_paragraph_spacing: f64 = 0.0;
    Alignment => alignment, with_alignment: TextAlignment = TextAlignment::Natural;
    /// Indentation of the first line from the leading margin.
    FirstLineHeadIndent => first_line_head_indent, with_first_line_head_indent: f64 = 0.0;
    /// Indentation of lines other than the first from the leading margin.
    HeadIndent => head_indent, with_head_indent: f64 = 0.0;
    /// Trailing margin; positive values measure from the leading margin,
    /// zero and negative values from the trailing edge.
    TailIndent => tail_indent, with_tail_indent: f64 = 0.0;
    LineBreakMode => line_break_mode, with_line_break_mode: LineBreak = LineBreak::WordWrapping;
    /// Minimum line height; zero means no minimum.
    MinimumLineHeight => minimum_line_height, with_minimum_line_height: f64 = 0.0;
    /// Maximum line height; zero means no limit.
    MaximumLineHeight => maximum_line_height, with_maximum_line_height: f64 = 0.0;
    BaseWritingDirection => base_writing_direction, with_base_writing_direction: WritingDirection = WritingDirection::Natural;
    LineHeightMultiple => line_height_multiple, with_line_height_multiple: f64 = 0.0;
    /// Space before the paragraph, in points.
    ParagraphSpacingBefore => paragraph_spacing_before, with_paragraph_spacing_before: f64 = 0.0;
    /// Hyphenation threshold between 0.0 and 1.0.
    HyphenationFactor => hyphenation_factor, with_hyphenation_factor: f32 = 0.0;
    TabStops => tab_stops, with_tab_stops: Vec<TabStop> = default_tab_stops();
    DefaultTabInterval => default_tab_interval, with_default_tab_interval: f64 = 0.0;
    AllowsDefaultTighteningForTruncation => allows_default_tightening_for_truncation, with_allows_default_tightening_for_truncation: bool = false;
}

impl ParagraphStyle {
    /// Creates a descriptor with every property unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default paragraph style with every property explicitly set.
    pub fn defaults() -> Self {
        Self::default().resolved()
    }

    /// Sets both the minimum and maximum line height.
    pub fn with_line_height(self, height: f64) -> Self {
        self.with_minimum_line_height(height)
            .with_maximum_line_height(height)
    }

    /// Returns `true` if no property is explicitly set.
    pub fn is_empty(&self) -> bool {
        self.explicit_properties().next().is_none()
    }

    /// Iterates over the explicitly set properties.
    pub fn explicit_properties(&self) -> impl Iterator<Item = ParagraphProperty> + '_ {
        ParagraphProperty::ALL
            .iter()
            .copied()
            .filter(move |property| self.is_set(*property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let style = ParagraphStyle::new();
        assert!(style.is_empty());
        assert_eq!(style.explicit_properties().count(), 0);
    }

    #[test]
    fn test_getters_fall_back_to_defaults() {
        let style = ParagraphStyle::new();
        assert_eq!(style.line_spacing(), 0.0);
        assert_eq!(style.alignment(), TextAlignment::Natural);
        assert_eq!(style.line_break_mode(), LineBreak::WordWrapping);
        assert_eq!(style.base_writing_direction(), WritingDirection::Natural);
        assert_eq!(style.tab_stops().len(), 12);
        assert!(!style.allows_default_tightening_for_truncation());
    }

    #[test]
    fn test_setter_marks_property_explicit() {
        let style = ParagraphStyle::new().with_tail_indent(-8.0);
        assert!(style.is_set(ParagraphProperty::TailIndent));
        assert_eq!(style.tail_indent(), -8.0);
        assert_eq!(
            style.explicit_properties().collect::<Vec<_>>(),
            vec![ParagraphProperty::TailIndent]
        );
    }

    #[test]
    fn test_setting_default_value_is_still_explicit() {
        let style = ParagraphStyle::new().with_alignment(TextAlignment::Natural);
        assert!(style.is_set(ParagraphProperty::Alignment));
        assert!(!style.is_empty());
    }

    #[test]
    fn test_with_line_height_sets_both_bounds() {
        let style = ParagraphStyle::new().with_line_height(18.0);
        assert_eq!(style.minimum_line_height(), 18.0);
        assert_eq!(style.maximum_line_height(), 18.0);
        assert_eq!(style.explicit_properties().count(), 2);
    }

    #[test]
    fn test_unset() {
        let mut style = ParagraphStyle::new().with_head_indent(4.0);
        style.unset(ParagraphProperty::HeadIndent);
        assert!(style.is_empty());
        assert_eq!(style.head_indent(), 0.0);
    }

    #[test]
    fn test_defaults_sets_everything() {
        let defaults = ParagraphStyle::defaults();
        assert_eq!(
            defaults.explicit_properties().count(),
            ParagraphProperty::ALL.len()
        );
        assert_eq!(defaults.line_break_mode(), LineBreak::WordWrapping);
    }

    #[test]
    fn test_resolved_keeps_explicit_values() {
        let style = ParagraphStyle::new().with_line_spacing(3.0).resolved();
        assert_eq!(style.line_spacing(), 3.0);
        assert!(style.is_set(ParagraphProperty::Alignment));
    }

    #[test]
    fn test_property_count() {
        assert_eq!(ParagraphProperty::ALL.len(), 16);
    }

    #[test]
    fn test_serde_skips_unset_properties() {
        let style = ParagraphStyle::new().with_line_break_mode(LineBreak::Clipping);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json, serde_json::json!({ "line_break_mode": "clipping" }));

        let back: ParagraphStyle = serde_json::from_value(json).unwrap();
        assert_eq!(back, style);
    }
}
