//! Card component with header, content, and footer.
//!
//! The sections are independent components placed side by side inside a
//! [`Card`]; none of them inspects or rewrites its siblings.

use leptos::prelude::*;

use crate::class_names::{cn, when};

/// Card surface treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Filled surface with a thin border.
    #[default]
    Default,
    /// Transparent surface with a heavier border.
    Outlined,
    /// Filled surface with a drop shadow.
    Elevated,
}

impl CardVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-white dark:bg-neutral-900 border border-neutral-200 dark:border-neutral-800",
            Self::Outlined => "bg-transparent border-2 border-neutral-300 dark:border-neutral-700",
            Self::Elevated => {
                "bg-white dark:bg-neutral-900 shadow-lg border border-neutral-200 dark:border-neutral-800"
            }
        }
    }
}

/// Inner spacing of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    /// No padding.
    None,
    /// Small padding.
    Sm,
    /// Medium padding (default).
    #[default]
    Md,
    /// Large padding.
    Lg,
}

impl CardPadding {
    /// Get CSS classes for this padding.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::None => "p-0",
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

/// Card container component.
///
/// A clickable card is exposed as a focusable button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card variant=CardVariant::Elevated hoverable=true>
///         <CardHeader divider=true>
///             <h3>"Title"</h3>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///         <CardFooter>
///             <Button>"Action"</Button>
///         </CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Surface treatment.
    #[prop(default = CardVariant::Default)]
    variant: CardVariant,
    /// Inner spacing.
    #[prop(default = CardPadding::Md)]
    padding: CardPadding,
    /// Lift the card on hover.
    #[prop(default = false)]
    hoverable: bool,
    /// Make the card behave like a button.
    #[prop(default = false)]
    clickable: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        Some("rounded-lg overflow-hidden transition-all duration-200"),
        Some(variant.classes()),
        Some(padding.classes()),
        when(
            hoverable,
            "hover:shadow-xl hover:scale-[1.02] hover:border-primary-200 dark:hover:border-primary-800",
        ),
        when(clickable, "cursor-pointer active:scale-[0.98]"),
        Some(class),
    ]);

    view! {
        <div class=classes role=clickable.then_some("button") tabindex=clickable.then_some("0")>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Draw a rule below the header.
    #[prop(default = false)]
    divider: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        Some("card-header"),
        when(divider, "border-b border-neutral-200 dark:border-neutral-800 pb-4 mb-4"),
        Some(class),
    ]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = cn([Some("card-content"), Some(class)]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(
    /// Draw a rule above the footer.
    #[prop(default = false)]
    divider: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Footer content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        Some("card-footer"),
        when(divider, "border-t border-neutral-200 dark:border-neutral-800 pt-4 mt-4"),
        Some(class),
    ]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_default_card() {
        let html = render_to_html(|| {
            view! {
                <Card>
                    <CardContent>"Body"</CardContent>
                </Card>
            }
        });
        assert!(html.contains("border-neutral-200"));
        assert!(html.contains("p-6"));
        assert!(html.contains("card-content"));
        assert!(!html.contains("role="));
        assert!(!html.contains("tabindex"));
    }

    #[test]
    fn test_clickable_card_is_focusable() {
        let html = render_to_html(|| {
            view! {
                <Card clickable=true variant=CardVariant::Elevated padding=CardPadding::Lg>
                    "Open"
                </Card>
            }
        });
        assert!(html.contains(r#"role="button""#));
        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains("shadow-lg"));
        assert!(html.contains("p-8"));
        assert!(html.contains("cursor-pointer"));
    }

    #[test]
    fn test_sections_with_dividers() {
        let html = render_to_html(|| {
            view! {
                <Card padding=CardPadding::None>
                    <CardHeader divider=true>"Title"</CardHeader>
                    <CardContent>"Body"</CardContent>
                    <CardFooter divider=true>"Actions"</CardFooter>
                </Card>
            }
        });
        assert!(html.contains("card-header border-b"));
        assert!(html.contains("card-footer border-t"));
        assert!(html.contains("p-0"));
    }
}
