//! UI components and pages.
//!
//! This module provides Leptos SSR components for rendering the component
//! library and its gallery.
//!
//! # Structure
//!
//! - [`components`]: Reusable UI components
//! - [`gallery`]: Pages showing every component permutation

pub mod components;
pub mod gallery;

use leptos::prelude::*;

/// Render a view to an HTML string.
///
/// The view is built inside a fresh reactive owner that is dropped once the
/// markup has been produced.
pub fn render_to_html<F, V>(view_fn: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view_fn().to_html())
}
