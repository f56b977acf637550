//! Aurora UI
//!
//! A small library of server-rendered UI components (Button, Input, Card,
//! Badge, Avatar and AvatarGroup) built with Leptos SSR and Tailwind utility
//! classes, plus a gallery server that showcases every permutation.
//!
//! # Architecture
//!
//! - **Identity**: Pure avatar resolution (image, initials or fallback) and
//!   group overflow composition, independent of any rendering
//! - **UI**: Leptos components translating props and resolution results into
//!   markup and accessibility attributes
//! - **Server**: Axum gallery with HTML pages, HTMX fragments and a JSON API
//!
//! # Modules
//!
//! - [`identity`]: Avatar descriptors, render decisions and display tokens
//! - [`class_names`]: Class attribute composition
//! - [`ui`]: Components and gallery pages
//! - [`config`]: Layered configuration
//! - [`server`]: HTTP surface

// Axum handlers are async without awaiting; Leptos components take props by value.
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod class_names;
pub mod config;
pub mod error;
pub mod identity;
pub mod server;
pub mod ui;

use crate::config::AppConfig;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
