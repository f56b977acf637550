//! Component gallery.
//!
//! One page per component, each showing the permutations a consumer is likely
//! to reach for: every size and variant, disabled and loading states, avatar
//! fallbacks and group overflow.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::Deserialize;

use crate::error::GalleryError;
use crate::identity::{AvatarShape, AvatarSize, IdentityDescriptor, Status};
use crate::ui::components::{
    ArrowRightIcon, Avatar, AvatarGroup, Badge, BadgeAppearance, BadgeSize, BadgeVariant, Button,
    ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardPadding, CardVariant,
    CheckIcon, Input, InputSize, MailIcon, SearchIcon, button_classes,
};
use crate::ui::render_to_html;

/// Settings the gallery pages read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GallerySettings {
    /// Site title shown in the header and `<title>`.
    pub title: String,
    /// Cap used by the avatar group demos.
    pub group_max: usize,
}

/// A gallery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryPage {
    /// Avatars and avatar groups.
    Avatar,
    /// Buttons.
    Button,
    /// Text inputs.
    Input,
    /// Cards.
    Card,
    /// Badges.
    Badge,
}

impl GalleryPage {
    /// All pages in navigation order.
    pub const ALL: [Self; 5] = [Self::Avatar, Self::Button, Self::Input, Self::Card, Self::Badge];

    /// URL slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Badge => "badge",
        }
    }

    /// Heading text.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Avatar => "Avatar",
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Card => "Card",
            Self::Badge => "Badge",
        }
    }

    /// Path under which the page is served.
    #[must_use]
    pub fn href(self) -> String {
        format!("/components/{}", self.slug())
    }
}

impl fmt::Display for GalleryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GalleryPage {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| GalleryError::UnknownComponent(s.to_string()))
    }
}

/// Wrap page content in the document shell.
fn html_shell(title: &str, site_title: &str, content: &str) -> String {
    let nav: String = GalleryPage::ALL
        .iter()
        .map(|page| {
            format!(
                r#"<a href="{}" class="px-3 py-2 rounded-lg text-sm text-neutral-500 hover:text-neutral-900 dark:hover:text-neutral-100">{}</a>"#,
                page.href(),
                page.title()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {site_title}</title>
    <style>[x-cloak] {{ display: none !important; }}</style>
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-neutral-50 text-neutral-900 dark:bg-neutral-950 dark:text-neutral-100 antialiased">
    <header class="sticky top-0 z-50 w-full border-b border-neutral-200 dark:border-neutral-800 bg-white/90 dark:bg-neutral-900/90 backdrop-blur">
        <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-5xl">
            <a href="/" class="font-semibold text-lg">{site_title}</a>
            <nav class="flex items-center gap-1">{nav}</nav>
        </div>
    </header>
    <main class="container mx-auto px-4 py-8 max-w-5xl space-y-10">
        {content}
    </main>
</body>
</html>"#
    )
}

/// Render the landing page listing every component.
pub fn render_index(settings: &GallerySettings) -> String {
    let content = render_to_html(|| view! { <IndexPage /> });
    html_shell("Components", &settings.title, &content)
}

/// Render one component page.
pub fn render_page(page: GalleryPage, settings: &GallerySettings) -> String {
    let group_max = settings.group_max;
    let content = render_to_html(move || match page {
        GalleryPage::Avatar => view! { <AvatarStories group_max=group_max /> }.into_any(),
        GalleryPage::Button => view! { <ButtonStories /> }.into_any(),
        GalleryPage::Input => view! { <InputStories /> }.into_any(),
        GalleryPage::Card => view! { <CardStories /> }.into_any(),
        GalleryPage::Badge => view! { <BadgeStories /> }.into_any(),
    });
    html_shell(page.title(), &settings.title, &content)
}

/// Titled block of examples.
#[component]
fn Story(
    /// Story heading.
    title: &'static str,
    /// Example markup.
    children: Children,
) -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h2 class="text-sm font-semibold uppercase tracking-wide text-neutral-500">{title}</h2>
            <div class="flex flex-wrap items-end gap-4">{children()}</div>
        </section>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    let cards: Vec<_> = GalleryPage::ALL
        .into_iter()
        .map(|page| {
            view! {
                <a href=page.href() class="block">
                    <Card hoverable=true clickable=true padding=CardPadding::Sm>
                        <CardHeader>
                            <h3 class="font-semibold">{page.title()}</h3>
                        </CardHeader>
                    </Card>
                </a>
            }
        })
        .collect();

    view! {
        <h1 class="text-2xl font-bold">"Components"</h1>
        <div class="grid gap-4 md:grid-cols-3">{cards}</div>
    }
}

/// Avatar swapped in by the "Server fragment" story.
const FRAGMENT_STORY_URL: &str = "/fragments/avatar?name=Grace%20Hopper&size=lg&status=online";

fn member(name: &str, image: Option<&str>, status: Option<Status>) -> IdentityDescriptor {
    let mut descriptor = IdentityDescriptor::new().with_name(name);
    descriptor.image = image.map(str::to_string);
    descriptor.status = status;
    descriptor
}

fn team() -> Vec<IdentityDescriptor> {
    vec![
        member("John Doe", Some("https://i.pravatar.cc/150?img=1"), None),
        member("Jane Smith", None, Some(Status::Online)),
        member("Bob Johnson", Some("https://i.pravatar.cc/150?img=3"), None),
        member("Alice Williams", None, Some(Status::Away)),
        member("Charlie Brown", None, None),
        member("Diana Prince", Some("https://i.pravatar.cc/150?img=5"), None),
        member("Evan Wright", None, Some(Status::Busy)),
        member("Fiona Gallagher", None, None),
    ]
}

#[component]
fn AvatarStories(
    /// Group cap for the overflow demos.
    group_max: usize,
) -> impl IntoView {
    let sizes: Vec<_> = AvatarSize::ALL
        .into_iter()
        .map(|size| view! { <Avatar name="JD" size=size /> })
        .collect();
    let statuses: Vec<_> = Status::ALL
        .into_iter()
        .enumerate()
        .map(|(i, status)| {
            let src = format!("https://i.pravatar.cc/150?img={}", i + 2);
            view! { <Avatar src=src status=status /> }
        })
        .collect();
    let initials: Vec<_> = ["John Doe", "Jane Smith", "Bob Johnson", "Alice Williams", "Charlie Brown"]
        .into_iter()
        .map(|name| view! { <Avatar name=name size=AvatarSize::Lg /> })
        .collect();

    view! {
        <h1 class="text-2xl font-bold">"Avatar"</h1>
        <Story title="Default">
            <Avatar name="John Doe" />
        </Story>
        <Story title="With image">
            <Avatar src="https://i.pravatar.cc/150?img=1" alt="User avatar" />
        </Story>
        <Story title="All sizes">{sizes}</Story>
        <Story title="With status">{statuses}</Story>
        <Story title="Shapes">
            <Avatar name="John Doe" shape=AvatarShape::Circle size=AvatarSize::Lg />
            <Avatar name="Jane Smith" shape=AvatarShape::Square size=AvatarSize::Lg />
            <Avatar src="https://i.pravatar.cc/150?img=6" shape=AvatarShape::Circle size=AvatarSize::Lg />
            <Avatar src="https://i.pravatar.cc/150?img=7" shape=AvatarShape::Square size=AvatarSize::Lg />
        </Story>
        <Story title="Bordered">
            <Avatar src="https://i.pravatar.cc/150?img=8" bordered=true size=AvatarSize::Lg />
            <Avatar name="John Doe" bordered=true size=AvatarSize::Lg />
            <Avatar src="https://i.pravatar.cc/150?img=9" bordered=true status=Status::Online size=AvatarSize::Lg />
        </Story>
        <Story title="With initials">{initials}</Story>
        <Story title="Fallback">
            <Avatar size=AvatarSize::Lg />
            <Avatar src="/static/missing.png" alt="Broken image" size=AvatarSize::Lg />
            <Avatar fallback=|| view! { <span class="font-bold">"?"</span> } size=AvatarSize::Lg />
        </Story>
        <Story title="Group">
            <AvatarGroup items=team() max=group_max />
        </Story>
        <Story title="Server fragment">
            <div id="avatar-fragment">
                <Avatar name="Ada Lovelace" size=AvatarSize::Lg />
            </div>
            <button
                type="button"
                class=button_classes(ButtonVariant::Outline, ButtonSize::Sm, false, false, "")
                hx-get=FRAGMENT_STORY_URL
                hx-target="#avatar-fragment"
                hx-swap="innerHTML"
            >
                "Load from server"
            </button>
        </Story>
        <Story title="Group sizes">
            <AvatarGroup items=team() max=3 size=AvatarSize::Sm />
            <AvatarGroup items=team() max=3 size=AvatarSize::Xl shape=AvatarShape::Square />
        </Story>
    }
}

#[component]
fn ButtonStories() -> impl IntoView {
    let variants: Vec<_> = ButtonVariant::ALL
        .into_iter()
        .map(|variant| view! { <Button variant=variant>{variant.label()}</Button> })
        .collect();

    view! {
        <h1 class="text-2xl font-bold">"Button"</h1>
        <Story title="Primary">
            <Button>"Primary Button"</Button>
        </Story>
        <Story title="All variants">{variants}</Story>
        <Story title="All sizes">
            <Button size=ButtonSize::Sm>"Small"</Button>
            <Button size=ButtonSize::Md>"Medium"</Button>
            <Button size=ButtonSize::Lg>"Large"</Button>
        </Story>
        <Story title="With icons">
            <Button left_icon=|| view! { <CheckIcon /> }>"Confirm"</Button>
            <Button variant=ButtonVariant::Outline right_icon=|| view! { <ArrowRightIcon /> }>
                "Continue"
            </Button>
        </Story>
        <Story title="Loading">
            <Button loading=true>"Saving"</Button>
            <Button loading=true variant=ButtonVariant::Secondary left_icon=|| view! { <CheckIcon /> }>
                "Submitting"
            </Button>
        </Story>
        <Story title="Disabled">
            <Button disabled=true>"Disabled"</Button>
            <Button disabled=true variant=ButtonVariant::Danger>"Delete"</Button>
        </Story>
        <Story title="Full width">
            <Button full_width=true>"Full width"</Button>
        </Story>
    }
}

#[component]
fn InputStories() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"Input"</h1>
        <Story title="Default">
            <Input label="Username" placeholder="Enter your username" />
        </Story>
        <Story title="With helper text">
            <Input label="Email" input_type="email" helper_text="We will never share your email." />
        </Story>
        <Story title="With error">
            <Input label="Email" input_type="email" value="not-an-email" error="Enter a valid email address" />
        </Story>
        <Story title="Required">
            <Input label="Full name" required=true />
        </Story>
        <Story title="All sizes">
            <Input size=InputSize::Sm placeholder="Small" />
            <Input size=InputSize::Md placeholder="Medium" />
            <Input size=InputSize::Lg placeholder="Large" />
        </Story>
        <Story title="With icons">
            <Input placeholder="Search..." left_icon=|| view! { <SearchIcon /> } />
            <Input input_type="email" placeholder="Email" right_icon=|| view! { <MailIcon /> } />
        </Story>
        <Story title="States">
            <Input label="Disabled" disabled=true value="Read only" />
        </Story>
        <Story title="Full width">
            <Input label="Address" full_width=true />
        </Story>
    }
}

#[component]
fn CardStories() -> impl IntoView {
    view! {
        <h1 class="text-2xl font-bold">"Card"</h1>
        <Story title="All variants">
            <Card variant=CardVariant::Default><CardContent>"Default"</CardContent></Card>
            <Card variant=CardVariant::Outlined><CardContent>"Outlined"</CardContent></Card>
            <Card variant=CardVariant::Elevated><CardContent>"Elevated"</CardContent></Card>
        </Story>
        <Story title="With dividers">
            <Card>
                <CardHeader divider=true>
                    <h3 class="font-semibold">"Card title"</h3>
                </CardHeader>
                <CardContent>
                    <p class="text-sm text-neutral-500">"Header and footer separated by rules."</p>
                </CardContent>
                <CardFooter divider=true>
                    <Button size=ButtonSize::Sm>"Action"</Button>
                </CardFooter>
            </Card>
        </Story>
        <Story title="Hoverable">
            <Card hoverable=true clickable=true>
                <CardContent>"Hover or focus me"</CardContent>
            </Card>
        </Story>
        <Story title="User card">
            <Card variant=CardVariant::Elevated>
                <CardContent class="flex items-center gap-4">
                    <Avatar name="Jane Smith" size=AvatarSize::Lg status=Status::Online />
                    <div>
                        <p class="font-semibold">"Jane Smith"</p>
                        <Badge variant=BadgeVariant::Success appearance=BadgeAppearance::Soft size=BadgeSize::Sm>
                            "Active"
                        </Badge>
                    </div>
                </CardContent>
            </Card>
        </Story>
        <Story title="Padding variants">
            <Card padding=CardPadding::None>"None"</Card>
            <Card padding=CardPadding::Sm>"Small"</Card>
            <Card padding=CardPadding::Md>"Medium"</Card>
            <Card padding=CardPadding::Lg>"Large"</Card>
        </Story>
    }
}

#[component]
fn BadgeStories() -> impl IntoView {
    let styles: Vec<_> = BadgeAppearance::ALL
        .into_iter()
        .flat_map(|appearance| {
            BadgeVariant::ALL.into_iter().map(move |variant| {
                view! { <Badge variant=variant appearance=appearance>{variant.label()}</Badge> }
            })
        })
        .collect();
    let statuses: Vec<_> = Status::ALL
        .into_iter()
        .map(|status| {
            view! {
                <Badge appearance=BadgeAppearance::Soft dot=true status=status>{status.as_str()}</Badge>
            }
        })
        .collect();

    view! {
        <h1 class="text-2xl font-bold">"Badge"</h1>
        <Story title="Default">
            <Badge>"Badge"</Badge>
        </Story>
        <Story title="All styles">{styles}</Story>
        <Story title="With dot">
            <Badge variant=BadgeVariant::Success dot=true>"Completed"</Badge>
            <Badge variant=BadgeVariant::Warning dot=true>"Pending"</Badge>
        </Story>
        <Story title="Sizes">
            <Badge size=BadgeSize::Sm>"Small"</Badge>
            <Badge size=BadgeSize::Md>"Medium"</Badge>
            <Badge size=BadgeSize::Lg>"Large"</Badge>
        </Story>
        <Story title="Pills">
            <Badge pill=true variant=BadgeVariant::Primary>"12"</Badge>
            <Badge pill=true variant=BadgeVariant::Danger>"99+"</Badge>
        </Story>
        <Story title="Status indicators">{statuses}</Story>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GallerySettings {
        GallerySettings {
            title: "Aurora UI".to_string(),
            group_max: 5,
        }
    }

    #[test]
    fn test_page_slugs_round_trip() {
        for page in GalleryPage::ALL {
            assert_eq!(page.slug().parse::<GalleryPage>().unwrap(), page);
        }
        assert!(matches!(
            "tooltip".parse::<GalleryPage>(),
            Err(GalleryError::UnknownComponent(slug)) if slug == "tooltip"
        ));
    }

    #[test]
    fn test_index_links_every_page() {
        let html = render_index(&settings());
        assert!(html.starts_with("<!DOCTYPE html>"));
        for page in GalleryPage::ALL {
            assert!(html.contains(&page.href()));
        }
    }

    #[test]
    fn test_avatar_page_uses_configured_cap() {
        let html = render_page(GalleryPage::Avatar, &settings());
        // Eight team members, five shown in the main group.
        assert!(html.contains(">+3<"));
        // Three shown in the sized groups.
        assert!(html.contains(">+5<"));
        assert!(html.contains("Avatar - Aurora UI"));
        assert!(html.contains(r#"hx-get="/fragments/avatar?name=Grace%20Hopper"#));
    }

    #[test]
    fn test_every_page_renders() {
        for page in GalleryPage::ALL {
            let html = render_page(page, &settings());
            assert!(html.contains(&format!("<h1 class=\"text-2xl font-bold\">{}</h1>", page.title())));
        }
    }
}
