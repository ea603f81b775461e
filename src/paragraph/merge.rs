//! Field-by-field merging of paragraph styles.

use std::ops::Add;

use super::style::ParagraphStyle;

/// Decides when a property set on the override replaces the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Any explicitly set property on the override wins.
    #[default]
    Explicit,
    /// An explicitly set property wins only if it differs from the default.
    ///
    /// Setting a property back to its default value on the override is
    /// indistinguishable from leaving it unset, so the base value survives.
    DifferentFromDefault,
}

impl MergePolicy {
    pub(crate) fn takes<T: PartialEq>(self, value: &T, default: &T) -> bool {
        match self {
            MergePolicy::Explicit => true,
            MergePolicy::DifferentFromDefault => value != default,
        }
    }
}

/// Merges `over` on top of `base` with [`MergePolicy::Explicit`].
///
/// The result starts as a copy of `base`; each property set on `over`
/// replaces the corresponding value. Properties `over` leaves unset keep the
/// base value.
///
/// # Example
///
/// ```rust
/// use attributed::{merge, LineBreak, ParagraphStyle};
///
/// let base = ParagraphStyle::new().with_line_height(20.0);
/// let over = ParagraphStyle::new().with_line_break_mode(LineBreak::TruncatingTail);
///
/// let merged = merge(&base, &over);
/// assert_eq!(merged.minimum_line_height(), 20.0);
/// assert_eq!(merged.line_break_mode(), LineBreak::TruncatingTail);
/// ```
pub fn merge(base: &ParagraphStyle, over: &ParagraphStyle) -> ParagraphStyle {
    merge_with(base, over, MergePolicy::default())
}

/// Merges `over` on top of `base` using the given policy.
pub fn merge_with(base: &ParagraphStyle, over: &ParagraphStyle, policy: MergePolicy) -> ParagraphStyle {
    let mut merged = base.clone();
    merged.absorb(over, policy);
    merged
}

impl Add for ParagraphStyle {
    type Output = ParagraphStyle;

    fn add(self, rhs: ParagraphStyle) -> ParagraphStyle {
        merge(&self, &rhs)
    }
}

impl<'a> Add<&'a ParagraphStyle> for &'a ParagraphStyle {
    type Output = ParagraphStyle;

    fn add(self, rhs: &'a ParagraphStyle) -> ParagraphStyle {
        merge(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::{LineBreak, ParagraphProperty, TabStop, TextAlignment};

    #[test]
    fn test_disjoint_properties_union() {
        let base = ParagraphStyle::new().with_line_height(20.0);
        let over = ParagraphStyle::new().with_line_break_mode(LineBreak::TruncatingTail);

        let merged = merge(&base, &over);
        assert_eq!(merged.minimum_line_height(), 20.0);
        assert_eq!(merged.maximum_line_height(), 20.0);
        assert_eq!(merged.line_break_mode(), LineBreak::TruncatingTail);
        assert_eq!(merged.explicit_properties().count(), 3);
    }

    #[test]
    fn test_overlapping_property_later_wins() {
        let base = ParagraphStyle::new()
            .with_minimum_line_height(10.0)
            .with_maximum_line_height(30.0)
            .with_alignment(TextAlignment::Center);
        let over = ParagraphStyle::new().with_maximum_line_height(15.0);

        let merged = merge(&base, &over);
        assert_eq!(merged.minimum_line_height(), 10.0);
        assert_eq!(merged.maximum_line_height(), 15.0);
        assert_eq!(merged.alignment(), TextAlignment::Center);
    }

    #[test]
    fn test_empty_override_changes_nothing() {
        let base = ParagraphStyle::new().with_head_indent(12.0);
        assert_eq!(merge(&base, &ParagraphStyle::new()), base);
    }

    #[test]
    fn test_empty_base_takes_override() {
        let over = ParagraphStyle::new().with_line_spacing(2.0);
        assert_eq!(merge(&ParagraphStyle::new(), &over), over);
    }

    #[test]
    fn test_merge_with_identical_copy_is_identity() {
        let style = ParagraphStyle::new()
            .with_line_spacing(2.0)
            .with_line_break_mode(LineBreak::Clipping);
        assert_eq!(merge(&style, &style.clone()), style);
        assert_eq!(
            merge_with(&style, &style, MergePolicy::DifferentFromDefault),
            style
        );
    }

    #[test]
    fn test_explicit_reset_to_default_wins() {
        let base = ParagraphStyle::new().with_line_break_mode(LineBreak::TruncatingHead);
        let over = ParagraphStyle::new().with_line_break_mode(LineBreak::WordWrapping);

        let merged = merge(&base, &over);
        assert_eq!(merged.line_break_mode(), LineBreak::WordWrapping);
    }

    #[test]
    fn test_legacy_policy_loses_reset_to_default() {
        let base = ParagraphStyle::new().with_line_break_mode(LineBreak::TruncatingHead);
        let over = ParagraphStyle::new().with_line_break_mode(LineBreak::WordWrapping);

        let merged = merge_with(&base, &over, MergePolicy::DifferentFromDefault);
        assert_eq!(merged.line_break_mode(), LineBreak::TruncatingHead);
    }

    #[test]
    fn test_tab_stops_replaced_as_a_whole() {
        let base = ParagraphStyle::new();
        let stops = vec![TabStop::new(TextAlignment::Right, 100.0)];
        let over = ParagraphStyle::new().with_tab_stops(stops.clone());

        let merged = merge(&base, &over);
        assert_eq!(merged.tab_stops(), stops);
        assert!(merged.is_set(ParagraphProperty::TabStops));
    }

    #[test]
    fn test_every_property_merges() {
        let base = ParagraphStyle::new();
        let over = ParagraphStyle::defaults();

        let merged = merge(&base, &over);
        for property in ParagraphProperty::ALL {
            assert!(merged.is_set(*property), "{:?} not merged", property);
        }

        let legacy = merge_with(&base, &over, MergePolicy::DifferentFromDefault);
        assert!(legacy.is_empty());
    }

    #[test]
    fn test_add_operator() {
        let a = ParagraphStyle::new().with_head_indent(4.0);
        let b = ParagraphStyle::new().with_tail_indent(-4.0);

        let by_ref = &a + &b;
        let by_value = a.clone() + b.clone();
        assert_eq!(by_ref, by_value);
        assert_eq!(by_ref, merge(&a, &b));
    }
}
