//! # font-switcher
//!
//! Leptos + WASM utility that switches the page font among a curated list of
//! CSS font stacks, persists the choice in `localStorage`, broadcasts a
//! `fontChanged` event, and keeps `select.font-controller` widgets in sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Core logic (`catalog`, `prefs`, `switcher`) is browser-agnostic and runs
//! natively for tests and SSR. The `browser` and `bindings` modules bind it to
//! `web-sys` and are only compiled with the `hydrate` feature.

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod prefs;
pub mod switcher;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod browser;

pub use catalog::{AVAILABLE_FONTS, DEFAULT_FONT, FontDescriptor};
pub use config::SwitcherConfig;
pub use error::FontError;
pub use event::{FONT_CHANGED_EVENT, FontChanged};
pub use host::FontHost;
pub use prefs::{FontPreferences, MemoryStore, PreferenceStore};
pub use switcher::{FontChange, FontSwitcher};
