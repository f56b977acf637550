//! Input component for labelled text fields.

use leptos::prelude::*;
use uuid::Uuid;

use crate::class_names::{cn, when};

/// Input height and text size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    /// Compact field.
    Sm,
    /// Default field.
    #[default]
    Md,
    /// Large field.
    Lg,
}

impl InputSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 text-sm",
            Self::Md => "h-10 text-base",
            Self::Lg => "h-12 text-lg",
        }
    }
}

/// Element ids derived from the input id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    /// Id of the `<input>` itself.
    pub input: String,
    /// Id of the helper paragraph.
    pub helper: String,
    /// Id of the error paragraph.
    pub error: String,
}

impl FieldIds {
    /// Use `id` when given, otherwise generate a unique `input-<uuid>` id.
    #[must_use]
    pub fn new(id: Option<String>) -> Self {
        let input = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("input-{}", Uuid::new_v4().simple()));
        Self {
            helper: format!("{input}-helper"),
            error: format!("{input}-error"),
            input,
        }
    }

    /// Target of `aria-describedby`: the error if any, else the helper text.
    #[must_use]
    pub fn described_by(&self, has_error: bool, has_helper: bool) -> Option<String> {
        if has_error {
            Some(self.error.clone())
        } else if has_helper {
            Some(self.helper.clone())
        } else {
            None
        }
    }
}

/// Text input with label, helper text, error message and icon slots.
///
/// The error message takes precedence over helper text and is announced
/// with `role="alert"`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         label="Email"
///         input_type="email"
///         placeholder="you@example.com"
///         helper_text="We never share your email."
///         required=true
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Label text.
    #[prop(optional, into)]
    label: Option<String>,
    /// Helper text shown below the field.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Error message. Marks the field invalid.
    #[prop(optional, into)]
    error: Option<String>,
    /// Field size.
    #[prop(default = InputSize::Md)]
    size: InputSize,
    /// Stretch the wrapper to the container width.
    #[prop(default = false)]
    full_width: bool,
    /// Icon inside the field, on the left.
    #[prop(optional, into)]
    left_icon: Option<ViewFn>,
    /// Icon inside the field, on the right.
    #[prop(optional, into)]
    right_icon: Option<ViewFn>,
    /// Input ID attribute. Generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Default value.
    #[prop(optional, into)]
    value: Option<String>,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes for the `<input>`.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let ids = FieldIds::new(id);
    let has_error = error.is_some();
    let described_by = ids.described_by(has_error, helper_text.is_some());

    let input_classes = cn([
        Some("w-full rounded-aurora-md border bg-white dark:bg-neutral-900 px-3 py-2"),
        Some("transition-colors duration-200 placeholder:text-neutral-400"),
        Some("focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2"),
        Some(if has_error {
            "border-red-500 focus-visible:ring-red-500 text-red-900 dark:text-red-100"
        } else {
            "border-neutral-300 focus-visible:ring-primary-500 dark:border-neutral-700"
        }),
        when(disabled, "opacity-50 cursor-not-allowed bg-neutral-50 dark:bg-neutral-800"),
        Some(size.classes()),
        when(left_icon.is_some(), "pl-10"),
        when(right_icon.is_some(), "pr-10"),
        Some(class),
    ]);

    let label = label.map(|text| {
        let classes = cn([
            Some("text-sm font-medium text-neutral-700 dark:text-neutral-300"),
            when(disabled, "opacity-50 cursor-not-allowed"),
        ]);
        let marker = required.then(|| {
            view! { <span class="text-red-500 ml-1" aria-label="required">"*"</span> }
        });
        view! {
            <label for=ids.input.clone() class=classes>
                {text}
                {marker}
            </label>
        }
    });

    let left = left_icon.map(|icon| {
        view! {
            <div class="absolute left-3 top-1/2 -translate-y-1/2 text-neutral-400" aria-hidden="true">
                {icon.run()}
            </div>
        }
    });
    let right = right_icon.map(|icon| {
        view! {
            <div class="absolute right-3 top-1/2 -translate-y-1/2 text-neutral-400" aria-hidden="true">
                {icon.run()}
            </div>
        }
    });

    let message = match (error, helper_text) {
        (Some(error), _) => view! {
            <p id=ids.error.clone() class="text-sm text-red-600 dark:text-red-400" role="alert">
                {error}
            </p>
        }
        .into_any(),
        (None, Some(helper)) => view! {
            <p id=ids.helper.clone() class="text-sm text-neutral-500 dark:text-neutral-400">
                {helper}
            </p>
        }
        .into_any(),
        (None, None) => ().into_any(),
    };

    let wrapper_classes = cn([Some("flex flex-col gap-1"), when(full_width, "w-full")]);

    view! {
        <div class=wrapper_classes>
            {label}
            <div class="relative">
                {left}
                <input
                    id=ids.input.clone()
                    type=input_type
                    name=name
                    placeholder=placeholder
                    value=value
                    disabled=disabled
                    required=required
                    class=input_classes
                    aria-invalid=has_error.to_string()
                    aria-describedby=described_by
                />
                {right}
            </div>
            {message}
        </div>
    }
}
