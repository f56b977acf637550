//! Symbolic display tokens shared by avatars and badges.
//!
//! Each token maps to a fixed set of utility classes. Tokens parse from and
//! serialize to their lowercase names (`"md"`, `"square"`, `"online"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a token name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} token: {value:?}")]
pub struct TokenParseError {
    /// Token family that failed to parse (e.g. `"size"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl TokenParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Avatar size, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// 24px.
    Xs,
    /// 32px.
    Sm,
    /// 40px (default).
    #[default]
    Md,
    /// 48px.
    Lg,
    /// 64px.
    Xl,
    /// 80px.
    #[serde(rename = "2xl")]
    Xxl,
}

impl AvatarSize {
    /// All sizes, small to large.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Dimension and text classes for the avatar body.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Xs => "w-6 h-6 text-xs",
            Self::Sm => "w-8 h-8 text-sm",
            Self::Md => "w-10 h-10 text-base",
            Self::Lg => "w-12 h-12 text-lg",
            Self::Xl => "w-16 h-16 text-xl",
            Self::Xxl => "w-20 h-20 text-2xl",
        }
    }

    /// Dimension classes for the status dot.
    #[must_use]
    pub fn status_classes(self) -> &'static str {
        match self {
            Self::Xs => "w-1.5 h-1.5",
            Self::Sm => "w-2 h-2",
            Self::Md => "w-2.5 h-2.5",
            Self::Lg => "w-3 h-3",
            Self::Xl => "w-3.5 h-3.5",
            Self::Xxl => "w-4 h-4",
        }
    }

    /// Negative horizontal spacing used to overlap avatars in a group.
    #[must_use]
    pub fn group_spacing(self) -> &'static str {
        match self {
            Self::Xs => "-space-x-1",
            Self::Sm => "-space-x-1.5",
            Self::Md => "-space-x-2",
            Self::Lg => "-space-x-2.5",
            Self::Xl => "-space-x-3",
            Self::Xxl => "-space-x-4",
        }
    }

    /// Lowercase token name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvatarSize {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| TokenParseError::new("size", s))
    }
}

/// Avatar outline shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    /// Fully rounded (default).
    #[default]
    Circle,
    /// Rounded corners.
    Square,
}

impl AvatarShape {
    /// Border radius class.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Circle => "rounded-full",
            Self::Square => "rounded-lg",
        }
    }

    /// Lowercase token name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for AvatarShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvatarShape {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            other => Err(TokenParseError::new("shape", other)),
        }
    }
}

/// Presence status shown as a small overlay dot.
///
/// Status never influences identity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Available.
    Online,
    /// Signed out.
    Offline,
    /// Idle.
    Away,
    /// Do not disturb.
    Busy,
}

impl Status {
    /// All statuses.
    pub const ALL: [Self; 4] = [Self::Online, Self::Offline, Self::Away, Self::Busy];

    /// Background colour class of the indicator.
    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Online => "bg-green-500",
            Self::Offline => "bg-neutral-400",
            Self::Away => "bg-yellow-500",
            Self::Busy => "bg-red-500",
        }
    }

    /// Accessible label, identical to the token name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Away => "away",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TokenParseError::new("status", s))
    }
}
