//! Button component with variants, sizes and a loading state.

use leptos::prelude::*;

use crate::class_names::{cn, when};
use crate::ui::components::LoaderIcon;

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 \
                            rounded-aurora-md font-medium transition-all duration-200 \
                            focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 \
                            disabled:opacity-50 disabled:cursor-not-allowed";

const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed pointer-events-none";

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Outlined button.
    Outline,
    /// Subtle ghost button.
    Ghost,
    /// Destructive action button.
    Danger,
}

impl ButtonVariant {
    /// All variants.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary-600 text-white hover:bg-primary-700 focus-visible:ring-primary-500",
            Self::Secondary => {
                "bg-neutral-200 text-neutral-900 hover:bg-neutral-300 focus-visible:ring-neutral-500 \
                 dark:bg-neutral-700 dark:text-neutral-100"
            }
            Self::Outline => {
                "border-2 border-primary-600 text-primary-600 hover:bg-primary-50 focus-visible:ring-primary-500"
            }
            Self::Ghost => "text-primary-600 hover:bg-primary-50 focus-visible:ring-primary-500",
            Self::Danger => "bg-red-600 text-white hover:bg-red-700 focus-visible:ring-red-500",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Danger => "Danger",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-sm",
            Self::Md => "h-10 px-4 text-base",
            Self::Lg => "h-12 px-6 text-lg",
        }
    }
}

/// Compose the class attribute of a button.
///
/// `disabled` is the effective state, i.e. already merged with `loading`.
#[must_use]
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
    class: &str,
) -> String {
    cn([
        Some(BASE_CLASSES),
        Some(variant.classes()),
        Some(size.classes()),
        Some(if full_width { "w-full" } else { "w-auto" }),
        when(disabled, DISABLED_CLASSES),
        Some(class),
    ])
}

/// Button with optional icons and a loading state.
///
/// A loading button is also disabled, announces itself with `aria-busy` and
/// replaces its icons with a spinner.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Md>
///         "Click me"
///     </Button>
///     <Button loading=true left_icon=|| view! { <CheckIcon /> }>"Saving"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Stretch to the container width.
    #[prop(default = false)]
    full_width: bool,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Show a spinner and block interaction.
    #[prop(default = false)]
    loading: bool,
    /// Icon rendered before the label.
    #[prop(optional, into)]
    left_icon: Option<ViewFn>,
    /// Icon rendered after the label.
    #[prop(optional, into)]
    right_icon: Option<ViewFn>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let is_disabled = disabled || loading;
    let classes = button_classes(variant, size, full_width, is_disabled, class);

    let icon_slot = |icon: Option<ViewFn>| {
        icon.filter(|_| !loading).map(|icon| {
            view! { <span class="inline-flex" aria-hidden="true">{icon.run()}</span> }
        })
    };
    let left = icon_slot(left_icon);
    let right = icon_slot(right_icon);

    view! {
        <button
            type=button_type
            class=classes
            disabled=is_disabled
            aria-busy=loading.to_string()
            aria-disabled=is_disabled.to_string()
        >
            {loading.then(|| view! { <LoaderIcon label="Loading" /> })}
            {left}
            <span>{children()}</span>
            {right}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::CheckIcon;
    use crate::ui::render_to_html;

    #[test]
    fn test_variant_and_size_classes() {
        let classes = button_classes(ButtonVariant::Danger, ButtonSize::Lg, false, false, "");
        assert!(classes.contains("bg-red-600"));
        assert!(classes.contains("h-12 px-6 text-lg"));
        assert!(classes.contains("w-auto"));
        assert!(!classes.contains("pointer-events-none"));
    }

    #[test]
    fn test_full_width_and_disabled_classes() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Md, true, true, "mt-4");
        assert!(classes.contains("w-full"));
        assert!(classes.contains("pointer-events-none"));
        assert!(classes.ends_with("mt-4"));
    }

    #[test]
    fn test_renders_children_and_type() {
        let html = render_to_html(|| view! { <Button>"Save"</Button> });
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("<span>Save</span>"));
        assert!(html.contains(r#"aria-busy="false""#));
        assert!(html.contains(r#"aria-disabled="false""#));
    }

    #[test]
    fn test_loading_disables_and_hides_icons() {
        let html = render_to_html(|| {
            view! {
                <Button loading=true left_icon=|| view! { <CheckIcon /> }>"Save"</Button>
            }
        });
        assert!(html.contains(r#"aria-busy="true""#));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains(r#"aria-label="Loading""#));
        assert!(!html.contains("polyline"));
    }

    #[test]
    fn test_icons_are_hidden_from_assistive_tech() {
        let html = render_to_html(|| {
            view! {
                <Button right_icon=|| view! { <CheckIcon /> }>"Done"</Button>
            }
        });
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("polyline"));
        assert!(!html.contains("animate-spin"));
    }
}
