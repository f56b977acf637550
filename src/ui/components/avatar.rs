//! Avatar and avatar group components.
//!
//! Both components delegate the "what to show" question to
//! [`IdentityDescriptor::resolve`] and only translate the resulting
//! [`RenderDecision`] into markup.
//!
//! Server-rendered pages cannot observe image load errors, so an image avatar
//! also carries the markup of its image-less resolution. A small Alpine.js scope
//! (`x-data="{ failed: false }"`) swaps it in when the `<img>` fires `error`.
//! Alpine loads deferred, so an image that already failed by then is caught
//! in `x-init`. The flag is never reset, so a failed image is not retried.

use leptos::prelude::*;

use crate::class_names::{cn, when};
use crate::identity::{
    AvatarShape, AvatarSize, DEFAULT_GROUP_MAX, IdentityDescriptor, RenderDecision, Status,
    compose,
};
use crate::ui::components::PersonIcon;

const ROOT_CLASSES: &str = "relative inline-flex items-center justify-center overflow-visible flex-shrink-0";
const BORDERED_CLASSES: &str = "ring-2 ring-white dark:ring-neutral-900 ring-offset-2";
const NEUTRAL_BACKGROUND: &str = "bg-neutral-200 dark:bg-neutral-800";
const OVERFLOW_BACKGROUND: &str = "bg-neutral-300 dark:bg-neutral-700";
const OVERFLOW_CLASSES: &str = "text-neutral-700 dark:text-neutral-300 ring-2 ring-white dark:ring-neutral-900";
const GROUP_ITEM_CLASSES: &str = "relative ring-2 ring-white dark:ring-neutral-900";

/// Fallback content that an avatar knows how to render.
pub trait FallbackContent {
    /// Render the content inside the fallback slot.
    fn render_fallback(&self) -> AnyView;
}

impl FallbackContent for String {
    fn render_fallback(&self) -> AnyView {
        self.clone().into_any()
    }
}

impl FallbackContent for ViewFn {
    fn render_fallback(&self) -> AnyView {
        self.run()
    }
}

/// Presentation settings that do not affect resolution.
#[derive(Debug, Clone, Copy)]
struct AvatarStyle {
    size: AvatarSize,
    shape: AvatarShape,
    bordered: bool,
    /// Replaces the neutral/palette background when set.
    background: Option<&'static str>,
    class: &'static str,
}

impl AvatarStyle {
    fn new(size: AvatarSize, shape: AvatarShape) -> Self {
        Self {
            size,
            shape,
            bordered: false,
            background: None,
            class: "",
        }
    }

    /// Background for a decision; images have none.
    fn background<F>(&self, decision: &RenderDecision<'_, F>) -> Option<&'static str> {
        match decision {
            RenderDecision::Image { .. } => None,
            RenderDecision::Initials { color, .. } => Some(self.background.unwrap_or(color.classes())),
            RenderDecision::Fallback { .. } => Some(self.background.unwrap_or(NEUTRAL_BACKGROUND)),
        }
    }

    fn root_classes<F>(&self, decision: &RenderDecision<'_, F>) -> String {
        cn([
            Some(ROOT_CLASSES),
            Some(self.size.classes()),
            Some(self.shape.classes()),
            when(self.bordered, BORDERED_CLASSES),
            self.background(decision),
            Some(self.class),
        ])
    }
}

/// Markup for the inside of the avatar frame.
///
/// `label` replaces derived initials; the group placeholder uses it to show
/// the full `+N` count.
fn decision_body<F: FallbackContent>(decision: &RenderDecision<'_, F>, label: Option<&str>) -> AnyView {
    match decision {
        RenderDecision::Image { src, alt } => view! {
            <img
                src=src.to_string()
                alt=alt.to_string()
                class="w-full h-full object-cover"
                x-on:error="failed = true"
                x-init="if ($el.complete && $el.naturalWidth === 0) failed = true"
            />
        }
        .into_any(),
        RenderDecision::Initials { text, .. } => {
            let text = label.map_or_else(|| text.clone(), str::to_string);
            view! { <span class="font-medium text-white select-none">{text}</span> }.into_any()
        }
        RenderDecision::Fallback { content } => {
            let content = match content {
                Some(content) => content.render_fallback(),
                None => view! { <PersonIcon /> }.into_any(),
            };
            view! { <span class="text-neutral-400">{content}</span> }.into_any()
        }
    }
}

fn status_dot(status: Status, size: AvatarSize) -> impl IntoView {
    let classes = cn([
        Some("absolute bottom-0 right-0 block rounded-full z-10 ring-2 ring-white dark:ring-neutral-900"),
        Some(size.status_classes()),
        Some(status.color_class()),
    ]);

    view! { <span class=classes aria-label=status.as_str() /> }
}

/// Render one descriptor with the given style.
fn render_avatar<F: FallbackContent>(
    descriptor: &IdentityDescriptor<F>,
    style: AvatarStyle,
    label: Option<&str>,
) -> AnyView {
    let decision = descriptor.resolve();
    let frame_classes = cn([
        Some("w-full h-full overflow-hidden flex items-center justify-center"),
        Some(style.shape.classes()),
    ]);
    let status = descriptor.status.map(|status| status_dot(status, style.size));
    let root_classes = style.root_classes(&decision);

    if let RenderDecision::Image { .. } = decision {
        let recovery = descriptor.resolve_without_image();
        let recovery_class = style
            .background(&recovery)
            .map(|background| format!("{{ '{background}': failed }}"));
        let image = decision_body(&decision, label);
        let replacement = decision_body(&recovery, label);

        view! {
            <div class=root_classes x-data="{ failed: false }" x-bind:class=recovery_class>
                <div class=frame_classes>
                    <span class="contents" x-show="!failed">
                        {image}
                    </span>
                    <span class="contents" x-show="failed" x-cloak>
                        {replacement}
                    </span>
                </div>
                {status}
            </div>
        }
        .into_any()
    } else {
        let body = decision_body(&decision, label);

        view! {
            <div class=root_classes>
                <div class=frame_classes>{body}</div>
                {status}
            </div>
        }
        .into_any()
    }
}

/// Avatar showing an image, initials or a fallback glyph.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar src="/images/user.jpg" alt="User" />
///     <Avatar name="John Doe" size=AvatarSize::Lg status=Status::Online />
///     <Avatar fallback=|| view! { "?" } shape=AvatarShape::Square />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    #[prop(optional, into)]
    src: Option<String>,
    /// Alt text for the image. Defaults to the name, then "Avatar".
    #[prop(optional, into)]
    alt: Option<String>,
    /// Display name used for alt text and initials.
    #[prop(optional, into)]
    name: Option<String>,
    /// Avatar size.
    #[prop(default = AvatarSize::Md)]
    size: AvatarSize,
    /// Avatar shape.
    #[prop(default = AvatarShape::Circle)]
    shape: AvatarShape,
    /// Presence indicator.
    #[prop(optional)]
    status: Option<Status>,
    /// Draw a ring around the avatar.
    #[prop(default = false)]
    bordered: bool,
    /// Content shown when there is neither an image nor a name.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let mut descriptor = IdentityDescriptor::<ViewFn>::new();
    descriptor.image = src;
    descriptor.alt = alt;
    descriptor.name = name;
    descriptor.fallback = fallback;
    descriptor.status = status;
    let style = AvatarStyle {
        bordered,
        class,
        ..AvatarStyle::new(size, shape)
    };

    render_avatar(&descriptor, style, None)
}

/// Avatar rendered from a caller-owned descriptor.
///
/// Unlike [`Avatar`], the descriptor may already carry a failed image, in
/// which case the image is skipped.
///
/// # Example
///
/// ```rust,ignore
/// let mut ada = IdentityDescriptor::new().with_image("/ada.png").with_name("Ada Lovelace");
/// ada.mark_image_failed();
/// view! { <IdentityAvatar descriptor=ada size=AvatarSize::Lg /> }
/// ```
#[component]
pub fn IdentityAvatar(
    /// What to display.
    descriptor: IdentityDescriptor,
    /// Avatar size.
    #[prop(default = AvatarSize::Md)]
    size: AvatarSize,
    /// Avatar shape.
    #[prop(default = AvatarShape::Circle)]
    shape: AvatarShape,
    /// Draw a ring around the avatar.
    #[prop(default = false)]
    bordered: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let style = AvatarStyle {
        bordered,
        class,
        ..AvatarStyle::new(size, shape)
    };

    render_avatar(&descriptor, style, None)
}

/// Overlapping row of avatars with a `+N` overflow placeholder.
///
/// Every member, including the placeholder, uses the group's `size` and
/// `shape`.
///
/// # Example
///
/// ```rust,ignore
/// let team = vec![
///     IdentityDescriptor::new().with_name("Ada Lovelace"),
///     IdentityDescriptor::new().with_image("/grace.png").with_name("Grace Hopper"),
///     IdentityDescriptor::new().with_name("Alan Turing"),
/// ];
/// view! { <AvatarGroup items=team max=2 size=AvatarSize::Sm /> }
/// ```
#[component]
pub fn AvatarGroup(
    /// Group members in display order.
    items: Vec<IdentityDescriptor>,
    /// Maximum number of visible members.
    #[prop(default = DEFAULT_GROUP_MAX)]
    max: usize,
    /// Size applied to every member.
    #[prop(default = AvatarSize::Md)]
    size: AvatarSize,
    /// Shape applied to every member.
    #[prop(default = AvatarShape::Circle)]
    shape: AvatarShape,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let group = compose(&items, max);
    let member_style = AvatarStyle::new(size, shape);
    let wrapper_classes = cn([Some(GROUP_ITEM_CLASSES), Some(shape.classes())]);

    let members: Vec<AnyView> = group
        .visible
        .iter()
        .map(|item| {
            let avatar = render_avatar(item, member_style, None);
            view! { <div class=wrapper_classes.clone()>{avatar}</div> }.into_any()
        })
        .collect();

    let overflow = group.overflow.as_ref().map(|placeholder| {
        let style = AvatarStyle {
            background: Some(OVERFLOW_BACKGROUND),
            class: OVERFLOW_CLASSES,
            ..member_style
        };
        render_avatar(placeholder, style, placeholder.name.as_deref())
    });

    let classes = cn([Some("flex items-center"), Some(size.group_spacing()), Some(class)]);

    view! {
        <div class=classes role="group">
            {members}
            {overflow}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_renders_image_with_alt() {
        let html = render_to_html(|| view! { <Avatar src="/img.png" alt="User" /> });
        assert!(html.contains(r#"src="/img.png""#));
        assert!(html.contains(r#"alt="User""#));
        assert!(html.contains("x-data"));
    }

    #[test]
    fn test_image_avatar_prepares_fallback_glyph() {
        let html = render_to_html(|| view! { <Avatar src="/bad.png" alt="broken" /> });
        assert!(html.contains("x-show=\"failed\""));
        assert!(html.contains(r#"x-on:error="failed = true""#));
        assert!(html.contains(r#"x-init="if ($el.complete"#));
        assert!(html.contains("$el.naturalWidth === 0) failed = true"));
        assert!(html.contains("<svg"));
        assert!(html.contains("'bg-neutral-200 dark:bg-neutral-800'"));
    }

    #[test]
    fn test_renders_initials_from_name() {
        let html = render_to_html(|| view! { <Avatar name="John Doe" /> });
        assert!(html.contains(">JD<"));
        assert!(html.contains("bg-emerald-500"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("x-data"));
    }

    #[test]
    fn test_renders_default_glyph_without_inputs() {
        let html = render_to_html(|| view! { <Avatar /> });
        assert!(html.contains("<svg"));
        assert!(html.contains("bg-neutral-200"));
    }

    #[test]
    fn test_renders_custom_fallback() {
        let html = render_to_html(|| view! { <Avatar fallback=|| view! { <b>"?"</b> } /> });
        assert!(html.contains("<b>?</b>"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_size_shape_and_border() {
        let html = render_to_html(|| {
            view! { <Avatar name="A" size=AvatarSize::Lg shape=AvatarShape::Square bordered=true /> }
        });
        assert!(html.contains("w-12 h-12 text-lg"));
        assert!(html.contains("rounded-lg"));
        assert!(html.contains("ring-offset-2"));
        assert!(html.contains("w-full h-full overflow-hidden flex items-center justify-center rounded-lg"));
    }

    #[test]
    fn test_status_indicator() {
        let html = render_to_html(|| view! { <Avatar name="S" status=Status::Online /> });
        assert!(html.contains(r#"aria-label="online""#));
        assert!(html.contains("bg-green-500"));
    }

    #[test]
    fn test_identity_avatar_skips_failed_image() {
        let descriptor = IdentityDescriptor::new()
            .with_image("/ada.png")
            .with_name("Ada Lovelace")
            .into_image_failed();
        let html = render_to_html(move || view! { <IdentityAvatar descriptor=descriptor /> });
        assert!(!html.contains("<img"));
        assert!(html.contains(">AL<"));
    }

    #[test]
    fn test_group_overflow() {
        let items = vec![
            IdentityDescriptor::new().with_name("Ann"),
            IdentityDescriptor::new().with_name("Bob"),
            IdentityDescriptor::new().with_name("Cid"),
        ];
        let html = render_to_html(move || view! { <AvatarGroup items=items max=2 /> });
        assert!(html.contains(">A<"));
        assert!(html.contains(">B<"));
        assert!(!html.contains(">C<"));
        assert!(html.contains(">+1<"));
        assert!(html.contains(OVERFLOW_BACKGROUND));
    }

    #[test]
    fn test_group_applies_shared_size() {
        let items = vec![
            IdentityDescriptor::new().with_name("Ann"),
            IdentityDescriptor::new().with_image("/bob.png"),
        ];
        let html = render_to_html(move || view! { <AvatarGroup items=items size=AvatarSize::Xs /> });
        assert_eq!(html.matches("w-6 h-6 text-xs").count(), 2);
        assert!(html.contains("-space-x-1"));
        assert!(!html.contains("+0"));
    }
}
