//! Shared UI crate for the VoidGrief site. All state, content and views
//! live here; the `web` and `desktop` crates only launch [`Site`].

use dioxus::prelude::*;

pub mod components;
pub mod content;
pub mod core;
pub mod views;

mod site;
pub use site::Site;

/// Shared theme stylesheet (web links it, desktop inlines the same file).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
