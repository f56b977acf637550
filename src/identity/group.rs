//! Avatar group composition.
//!
//! A group shows at most `max` avatars and summarises the rest with a single
//! `+N` placeholder appended after the visible prefix.

use serde::Serialize;
use tracing::debug;

use super::IdentityDescriptor;

/// Number of avatars shown by a group when no cap is given.
pub const DEFAULT_GROUP_MAX: usize = 5;

/// Outcome of [`compose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResult<'a, F = String> {
    /// Leading items in input order, at most `max` of them.
    pub visible: &'a [IdentityDescriptor<F>],
    /// Number of items left out of `visible`.
    pub overflow_count: usize,
    /// Synthetic `+N` descriptor, present only when `overflow_count > 0`.
    pub overflow: Option<IdentityDescriptor<F>>,
}

impl<F> GroupResult<'_, F> {
    /// Visible items followed by the overflow placeholder, in display order.
    pub fn members(&self) -> impl Iterator<Item = &IdentityDescriptor<F>> {
        self.visible.iter().chain(self.overflow.as_ref())
    }

    /// Whether any items were hidden.
    pub fn has_overflow(&self) -> bool {
        self.overflow_count > 0
    }
}

/// Split `items` into a visible prefix and an overflow count.
///
/// Order is preserved and nothing is sorted or de-duplicated. A `max` of zero
/// hides every item.
pub fn compose<F>(items: &[IdentityDescriptor<F>], max: usize) -> GroupResult<'_, F> {
    let shown = max.min(items.len());
    let overflow_count = items.len() - shown;

    let overflow = (overflow_count > 0).then(|| {
        debug!(
            name: "avatar.group.overflow",
            total = items.len(),
            max,
            overflow_count,
            "Avatar group overflow"
        );
        IdentityDescriptor::new().with_name(format!("+{overflow_count}"))
    });

    GroupResult {
        visible: &items[..shown],
        overflow_count,
        overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::RenderDecision;

    fn people(names: &[&str]) -> Vec<IdentityDescriptor> {
        names
            .iter()
            .map(|n| IdentityDescriptor::new().with_name(*n))
            .collect()
    }

    #[test]
    fn test_empty_group() {
        let items: Vec<IdentityDescriptor> = Vec::new();
        let result = compose(&items, DEFAULT_GROUP_MAX);
        assert!(result.visible.is_empty());
        assert_eq!(result.overflow_count, 0);
        assert!(result.overflow.is_none());
        assert_eq!(result.members().count(), 0);
    }

    #[test]
    fn test_overflow_placeholder() {
        let items = people(&["A", "B", "C"]);
        let result = compose(&items, 2);

        assert_eq!(result.visible, &items[..2]);
        assert_eq!(result.overflow_count, 1);
        let overflow = result.overflow.as_ref().unwrap();
        assert_eq!(overflow.name.as_deref(), Some("+1"));
        assert!(overflow.image.is_none());
        assert!(overflow.fallback.is_none());
    }

    #[test]
    fn test_no_overflow_within_cap() {
        for len in 0..=DEFAULT_GROUP_MAX {
            let names: Vec<String> = (0..len).map(|i| format!("User {i}")).collect();
            let items: Vec<IdentityDescriptor> = names
                .iter()
                .map(|n| IdentityDescriptor::new().with_name(n.as_str()))
                .collect();
            let result = compose(&items, DEFAULT_GROUP_MAX);
            assert_eq!(result.visible.len(), len);
            assert!(!result.has_overflow());
            assert!(result.overflow.is_none());
        }
    }

    #[test]
    fn test_zero_max_hides_everything() {
        let items = people(&["A", "B", "C"]);
        let result = compose(&items, 0);
        assert!(result.visible.is_empty());
        assert_eq!(result.overflow_count, 3);
        assert_eq!(result.overflow.unwrap().name.as_deref(), Some("+3"));
    }

    #[test]
    fn test_members_appends_placeholder_last() {
        let items = people(&["Zed", "Amy", "Bob", "Cat"]);
        let result = compose(&items, 3);
        let names: Vec<_> = result
            .members()
            .map(|m| m.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, ["Zed", "Amy", "Bob", "+1"]);
    }

    #[test]
    fn test_placeholder_resolves_to_initials() {
        let items = people(&["A", "B", "C", "D", "E", "F", "G"]);
        let result = compose(&items, DEFAULT_GROUP_MAX);
        let overflow = result.overflow.as_ref().unwrap();
        // Initials keep only the first character of the single "+2" word.
        match overflow.resolve() {
            RenderDecision::Initials { text, .. } => assert_eq!(text, "+"),
            other => panic!("expected initials, got {other:?}"),
        }
    }
}
