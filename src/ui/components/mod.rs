//! Reusable UI components.
//!
//! Leptos SSR components styled with Tailwind utility classes. Every component
//! accepts an extra `class` that is appended after its own classes.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants, sizes and a loading state
//! - [`Input`]: Labelled text field with helper and error text
//! - [`Card`], [`CardHeader`], [`CardContent`], [`CardFooter`]: Card container
//! - [`Badge`]: Status badge/tag
//! - [`Avatar`], [`IdentityAvatar`], [`AvatarGroup`]: User avatars with fallback and overflow
//! - Icons: [`LoaderIcon`], [`PersonIcon`] and friends

mod avatar;
mod badge;
mod button;
mod card;
mod icons;
mod input;

pub use avatar::{Avatar, AvatarGroup, FallbackContent, IdentityAvatar};
pub use badge::{Badge, BadgeAppearance, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant, button_classes};
pub use card::{Card, CardContent, CardFooter, CardHeader, CardPadding, CardVariant};
pub use icons::*;
pub use input::{FieldIds, Input, InputSize};
