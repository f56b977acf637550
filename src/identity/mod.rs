//! Avatar identity resolution.
//!
//! An [`IdentityDescriptor`] describes what is known about one avatar: an
//! optional image, an optional display name, optional fallback content and
//! whether the image already failed to load. [`IdentityDescriptor::resolve`]
//! turns it into exactly one [`RenderDecision`]:
//!
//! 1. a usable image wins,
//! 2. otherwise a non-empty name yields initials on a palette colour,
//! 3. otherwise the fallback content (or the default glyph) is shown.
//!
//! Grouping and overflow live in [`group`].

pub mod group;
mod tokens;

use serde::{Deserialize, Serialize};

pub use group::{DEFAULT_GROUP_MAX, GroupResult, compose};
pub use tokens::{AvatarShape, AvatarSize, Status, TokenParseError};

/// Alt text used when neither explicit alt text nor a name is available.
pub const DEFAULT_ALT: &str = "Avatar";

/// Maximum number of characters in derived initials.
const MAX_INITIALS: usize = 2;

/// Caller-owned display inputs for a single avatar.
///
/// `F` is the fallback content type. It is opaque to resolution and only
/// handed back through [`RenderDecision::Fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDescriptor<F = String> {
    /// Image reference (URL or path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Explicit alt text for the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Content shown when neither image nor name resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<F>,
    /// Presence indicator. Not consulted by [`resolve`](Self::resolve).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    image_failed: bool,
}

impl<F> Default for IdentityDescriptor<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> IdentityDescriptor<F> {
    /// Create an empty descriptor. It resolves to the default fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            image: None,
            alt: None,
            name: None,
            fallback: None,
            status: None,
            image_failed: false,
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set explicit alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the fallback content.
    #[must_use]
    pub fn with_fallback(mut self, fallback: F) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Set the presence status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether a previous attempt to load the image failed.
    pub fn image_failed(&self) -> bool {
        self.image_failed
    }

    /// Record that the image failed to load.
    ///
    /// The flag only ever moves from `false` to `true`; a failed image is never
    /// retried for the lifetime of this descriptor. Repeated calls are no-ops.
    pub fn mark_image_failed(&mut self) {
        self.image_failed = true;
    }

    /// Consuming form of [`mark_image_failed`](Self::mark_image_failed).
    #[must_use]
    pub fn into_image_failed(mut self) -> Self {
        self.mark_image_failed();
        self
    }

    /// Image reference if present and not yet failed.
    fn usable_image(&self) -> Option<&str> {
        if self.image_failed {
            return None;
        }
        non_empty(self.image.as_deref())
    }

    /// Decide which representation to display.
    ///
    /// Total over all inputs: every descriptor yields a decision.
    pub fn resolve(&self) -> RenderDecision<'_, F> {
        if let Some(src) = self.usable_image() {
            let alt = non_empty(self.alt.as_deref())
                .or_else(|| non_empty(self.name.as_deref()))
                .unwrap_or(DEFAULT_ALT);
            return RenderDecision::Image { src, alt };
        }
        self.resolve_without_image()
    }

    /// The decision [`resolve`](Self::resolve) yields once the image is
    /// unusable: initials for a non-empty name, otherwise the fallback.
    ///
    /// Renderers use this to prepare the representation that replaces an
    /// image if it fails to load.
    pub fn resolve_without_image(&self) -> RenderDecision<'_, F> {
        match non_empty(self.name.as_deref()) {
            Some(name) => RenderDecision::Initials {
                text: initials_of(name),
                color: color_of(name),
            },
            None => RenderDecision::Fallback {
                content: self.fallback.as_ref(),
            },
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The representation chosen for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderDecision<'a, F = String> {
    /// Show the image.
    Image {
        /// Image reference.
        src: &'a str,
        /// Resolved alt text.
        alt: &'a str,
    },
    /// Show initials on a coloured background.
    Initials {
        /// Up to two uppercase characters. Empty for whitespace-only names.
        text: String,
        /// Background colour derived from the name.
        color: ColorToken,
    },
    /// Show caller content, or the default glyph when `content` is `None`.
    Fallback {
        /// Caller-supplied fallback.
        content: Option<&'a F>,
    },
}

impl<F> RenderDecision<'_, F> {
    /// Short name of the active representation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Initials { .. } => "initials",
            Self::Fallback { .. } => "fallback",
        }
    }

    /// Whether the image representation is active.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Derive initials from a display name.
///
/// Takes the first character of each whitespace-separated word, uppercases the
/// result and keeps at most two characters.
///
/// ```
/// use aurora_ui::identity::initials_of;
///
/// assert_eq!(initials_of("John Doe"), "JD");
/// assert_eq!(initials_of("ada lovelace byron"), "AL");
/// ```
#[must_use]
pub fn initials_of(name: &str) -> String {
    let firsts: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    firsts.to_uppercase().chars().take(MAX_INITIALS).collect()
}

/// Pick a palette colour from the first character of `name`.
///
/// The index is the first UTF-16 code unit modulo the palette length, so names
/// sharing a first character share a colour. Empty names map to the first
/// palette entry.
#[must_use]
pub fn color_of(name: &str) -> ColorToken {
    let code = name.encode_utf16().next().unwrap_or(0);
    ColorToken::ALL[usize::from(code) % ColorToken::ALL.len()]
}

/// Initials background palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl ColorToken {
    /// Palette in selection order.
    pub const ALL: [Self; 17] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
    ];

    /// Background class for this colour.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Red => "bg-red-500",
            Self::Orange => "bg-orange-500",
            Self::Amber => "bg-amber-500",
            Self::Yellow => "bg-yellow-500",
            Self::Lime => "bg-lime-500",
            Self::Green => "bg-green-500",
            Self::Emerald => "bg-emerald-500",
            Self::Teal => "bg-teal-500",
            Self::Cyan => "bg-cyan-500",
            Self::Sky => "bg-sky-500",
            Self::Blue => "bg-blue-500",
            Self::Indigo => "bg-indigo-500",
            Self::Violet => "bg-violet-500",
            Self::Purple => "bg-purple-500",
            Self::Fuchsia => "bg-fuchsia-500",
            Self::Pink => "bg-pink-500",
            Self::Rose => "bg-rose-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> IdentityDescriptor {
        IdentityDescriptor::new().with_name(name)
    }

    #[test]
    fn test_image_wins_when_present() {
        let d = named("John Doe").with_image("/img.png");
        assert_eq!(
            d.resolve(),
            RenderDecision::Image {
                src: "/img.png",
                alt: "John Doe"
            }
        );
    }

    #[test]
    fn test_alt_text_precedence() {
        let d: IdentityDescriptor = IdentityDescriptor::new()
            .with_image("/a.png")
            .with_alt("User")
            .with_name("John Doe");
        assert_eq!(
            d.resolve(),
            RenderDecision::Image {
                src: "/a.png",
                alt: "User"
            }
        );

        let anonymous: IdentityDescriptor = IdentityDescriptor::new().with_image("/a.png");
        assert_eq!(
            anonymous.resolve(),
            RenderDecision::Image {
                src: "/a.png",
                alt: DEFAULT_ALT
            }
        );
    }

    #[test]
    fn test_empty_image_is_ignored() {
        let d = named("Alice").with_image("");
        assert_eq!(d.resolve().kind(), "initials");
    }

    #[test]
    fn test_initials_when_no_image() {
        match named("John Doe").resolve() {
            RenderDecision::Initials { text, color } => {
                assert_eq!(text, "JD");
                assert_eq!(color, color_of("John Doe"));
            }
            other => panic!("expected initials, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_image_falls_through_to_initials() {
        let mut d = named("Jane Smith").with_image("/bad.png");
        assert!(d.resolve().is_image());

        d.mark_image_failed();
        assert!(d.image_failed());
        assert_eq!(d.resolve().kind(), "initials");

        // Repeated or late failure signals change nothing.
        d.mark_image_failed();
        assert!(!d.resolve().is_image());
        assert!(!d.resolve().is_image());
    }

    #[test]
    fn test_failed_image_without_name_uses_fallback() {
        let d: IdentityDescriptor = IdentityDescriptor::new()
            .with_image("/bad.png")
            .with_alt("broken")
            .into_image_failed();
        assert_eq!(d.resolve(), RenderDecision::Fallback { content: None });
    }

    #[test]
    fn test_fallback_carries_content() {
        let d = IdentityDescriptor::new().with_fallback("?".to_string());
        let expected = "?".to_string();
        assert_eq!(
            d.resolve(),
            RenderDecision::Fallback {
                content: Some(&expected)
            }
        );

        let empty_name = named("");
        assert_eq!(empty_name.resolve(), RenderDecision::Fallback { content: None });
    }

    #[test]
    fn test_resolve_without_image_matches_failed_resolution() {
        let d = named("Ada Lovelace").with_image("/ada.png");
        let failed = d.clone().into_image_failed();
        assert_eq!(d.resolve_without_image(), failed.resolve());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let d = named("Bob Johnson").with_status(Status::Busy);
        assert_eq!(d.resolve(), d.resolve());
    }

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("John Doe"), "JD");
        assert_eq!(initials_of("Alice"), "A");
        assert_eq!(initials_of("a"), "A");
        assert_eq!(initials_of("mary  jane   watson"), "MJ");
        assert_eq!(initials_of("+3"), "+");
    }

    #[test]
    fn test_whitespace_name_yields_empty_initials() {
        match named("   ").resolve() {
            RenderDecision::Initials { text, color } => {
                assert!(text.is_empty());
                assert_eq!(color, color_of(" "));
            }
            other => panic!("expected initials, got {other:?}"),
        }
    }

    #[test]
    fn test_color_depends_on_first_char_only() {
        assert_eq!(color_of("Alice"), color_of("Adam"));
        // 'A' is 65, 65 % 17 == 14.
        assert_eq!(color_of("Alice"), ColorToken::Fuchsia);
        // 'J' is 74, 74 % 17 == 6.
        assert_eq!(color_of("John"), ColorToken::Emerald);
        assert_eq!(color_of(""), ColorToken::Red);
        assert!(ColorToken::ALL.contains(&color_of("Zoë")));
    }

    #[test]
    fn test_decision_serializes_with_kind_tag() {
        let d = named("John Doe");
        let json = serde_json::to_value(d.resolve()).unwrap();
        assert_eq!(json["kind"], "initials");
        assert_eq!(json["text"], "JD");
        assert_eq!(json["color"], "emerald");
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let d: IdentityDescriptor =
            serde_json::from_str(r#"{ "name": "Ada", "status": "online" }"#).unwrap();
        assert_eq!(d.name.as_deref(), Some("Ada"));
        assert_eq!(d.status, Some(Status::Online));
        assert!(!d.image_failed());
    }
}
