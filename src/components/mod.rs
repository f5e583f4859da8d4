//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render font controls that stay in sync with the persisted font
//! through the shared `select.font-controller` contract.

pub mod font_selector;

pub use font_selector::FontSelector;
