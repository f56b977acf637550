//! Badge component for status indicators and tags.

use leptos::prelude::*;

use crate::class_names::cn;
use crate::identity::Status;

/// Badge colour family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral grey.
    #[default]
    Default,
    /// Brand colour.
    Primary,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error/destructive badge.
    Danger,
    /// Informational badge.
    Info,
}

/// How strongly a badge is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeAppearance {
    /// Filled background, white text.
    #[default]
    Solid,
    /// Border and text only.
    Outline,
    /// Tinted background.
    Soft,
}

impl BadgeAppearance {
    /// All appearances.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Outline, Self::Soft];
}

impl BadgeVariant {
    /// All variants.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    /// Get CSS classes for this variant in the given appearance.
    #[must_use]
    pub fn classes(self, appearance: BadgeAppearance) -> &'static str {
        use BadgeAppearance::{Outline, Soft, Solid};

        match (self, appearance) {
            (Self::Default, Solid) => "bg-neutral-600 text-white",
            (Self::Default, Outline) => "border-2 border-neutral-600 text-neutral-600",
            (Self::Default, Soft) => {
                "bg-neutral-100 text-neutral-700 dark:bg-neutral-800 dark:text-neutral-300"
            }
            (Self::Primary, Solid) => "bg-primary-600 text-white",
            (Self::Primary, Outline) => "border-2 border-primary-600 text-primary-600",
            (Self::Primary, Soft) => {
                "bg-primary-100 text-primary-700 dark:bg-primary-950 dark:text-primary-300"
            }
            (Self::Success, Solid) => "bg-green-600 text-white",
            (Self::Success, Outline) => "border-2 border-green-600 text-green-600",
            (Self::Success, Soft) => "bg-green-100 text-green-700 dark:bg-green-950 dark:text-green-300",
            (Self::Warning, Solid) => "bg-yellow-600 text-white",
            (Self::Warning, Outline) => "border-2 border-yellow-600 text-yellow-600",
            (Self::Warning, Soft) => {
                "bg-yellow-100 text-yellow-700 dark:bg-yellow-950 dark:text-yellow-300"
            }
            (Self::Danger, Solid) => "bg-red-600 text-white",
            (Self::Danger, Outline) => "border-2 border-red-600 text-red-600",
            (Self::Danger, Soft) => "bg-red-100 text-red-700 dark:bg-red-950 dark:text-red-300",
            (Self::Info, Solid) => "bg-blue-600 text-white",
            (Self::Info, Outline) => "border-2 border-blue-600 text-blue-600",
            (Self::Info, Soft) => "bg-blue-100 text-blue-700 dark:bg-blue-950 dark:text-blue-300",
        }
    }

    /// Colour of the leading dot when no status is set.
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Default => "bg-neutral-600",
            Self::Primary => "bg-primary-600",
            Self::Success => "bg-green-600",
            Self::Warning => "bg-yellow-600",
            Self::Danger => "bg-red-600",
            Self::Info => "bg-blue-600",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Primary => "Primary",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Info => "Info",
        }
    }
}

/// Badge size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    /// Small badge.
    Sm,
    /// Medium badge (default).
    #[default]
    Md,
    /// Large badge.
    Lg,
}

impl BadgeSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "text-xs px-2 py-0.5",
            Self::Md => "text-sm px-2.5 py-0.5",
            Self::Lg => "text-base px-3 py-1",
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Active"</Badge>
///     <Badge appearance=BadgeAppearance::Soft dot=true status=Status::Away>"Away"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Fill style.
    #[prop(default = BadgeAppearance::Solid)]
    appearance: BadgeAppearance,
    /// Badge size.
    #[prop(default = BadgeSize::Md)]
    size: BadgeSize,
    /// Status colour for the dot. Overrides the variant dot colour.
    #[prop(optional)]
    status: Option<Status>,
    /// Show a leading dot.
    #[prop(default = false)]
    dot: bool,
    /// Fully rounded ends.
    #[prop(default = false)]
    pill: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        Some("inline-flex items-center gap-1.5 font-medium"),
        Some(if pill { "rounded-full" } else { "rounded" }),
        Some(variant.classes(appearance)),
        Some(size.classes()),
        Some(class),
    ]);

    let dot = dot.then(|| {
        let color = status.map_or_else(|| variant.dot_class(), Status::color_class);
        let dot_classes = cn([Some("w-1.5 h-1.5 rounded-full"), Some(color)]);
        view! { <span class=dot_classes aria-hidden="true" /> }
    });

    view! {
        <span class=classes>
            {dot}
            {children()}
        </span>
    }
}
