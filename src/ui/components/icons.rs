//! Inline SVG icons used by the components and the gallery.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Spinning loader shown by busy buttons.
#[component]
pub fn LoaderIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Accessible label. Omitted when empty.
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} animate-spin {class}");
    let label = (!label.is_empty()).then_some(label);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            aria-label=label
        >
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </svg>
    }
}

/// Filled silhouette used as the default avatar fallback.
#[component]
pub fn PersonIcon(
    /// Size and colour classes.
    #[prop(default = "w-2/3 h-2/3")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 20 20" aria-hidden="true">
            <path
                fill-rule="evenodd"
                d="M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z"
                clip-rule="evenodd"
            />
        </svg>
    }
}

/// Check/success icon.
#[component]
pub fn CheckIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}

/// Magnifier icon for search fields.
#[component]
pub fn SearchIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <circle cx="11" cy="11" r="8" />
            <line x1="21" y1="21" x2="16.65" y2="16.65" />
        </svg>
    }
}

/// Envelope icon.
#[component]
pub fn MailIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-10 6L2 7" />
        </svg>
    }
}

/// Arrow pointing right.
#[component]
pub fn ArrowRightIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <line x1="5" y1="12" x2="19" y2="12" />
            <polyline points="12 5 19 12 12 19" />
        </svg>
    }
}
