//! Class-name composition.
//!
//! Components build their `class` attribute from fixed tables plus optional,
//! condition-dependent fragments. [`cn`] joins them into one normalised string.

/// Join class fragments into a single class attribute value.
///
/// `None` and blank fragments are skipped, whitespace is collapsed and exact
/// duplicate classes are dropped (first occurrence wins).
///
/// ```
/// use aurora_ui::class_names::{cn, when};
///
/// let disabled = true;
/// let classes = cn([
///     Some("inline-flex  items-center"),
///     when(disabled, "opacity-50"),
///     Some("inline-flex"),
///     None,
/// ]);
/// assert_eq!(classes, "inline-flex items-center opacity-50");
/// ```
pub fn cn<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.into_iter().flatten().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// `Some(class)` when `condition` holds.
pub fn when(condition: bool, class: &str) -> Option<&str> {
    condition.then_some(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_empty_and_none() {
        assert_eq!(cn([None, Some(""), Some("   ")]), "");
        assert_eq!(cn([Some("a"), None, Some("b")]), "a b");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(cn([Some("  px-3\n py-2 "), Some("\ttext-sm")]), "px-3 py-2 text-sm");
    }

    #[test]
    fn test_drops_duplicates_in_order() {
        assert_eq!(
            cn([Some("rounded-full ring-2"), Some("ring-2 rounded-full shadow")]),
            "rounded-full ring-2 shadow"
        );
    }

    #[test]
    fn test_when() {
        assert_eq!(when(true, "w-full"), Some("w-full"));
        assert_eq!(when(false, "w-full"), None);
    }
}
