//! Switcher configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::catalog;
use crate::error::FontError;
use crate::event::FONT_CHANGED_EVENT;

pub const DEFAULT_STORAGE_KEY: &str = "focus-font";
pub const DEFAULT_SELECTOR_CLASS: &str = "font-controller";
pub const DEFAULT_SELECTOR_SYNC_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherConfig {
    /// `localStorage` key holding the last applied identifier.
    pub storage_key: String,
    /// Identifier applied when nothing valid is stored.
    pub default_font: String,
    /// CSS class marking `<select>` elements as font controls.
    pub selector_class: String,
    /// Name of the `CustomEvent` dispatched on `document`.
    pub event_name: String,
    /// Delay before the follow-up selector resync after initialization.
    pub selector_sync_delay_ms: u32,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_font: catalog::DEFAULT_FONT.to_owned(),
            selector_class: DEFAULT_SELECTOR_CLASS.to_owned(),
            event_name: FONT_CHANGED_EVENT.to_owned(),
            selector_sync_delay_ms: DEFAULT_SELECTOR_SYNC_DELAY_MS,
        }
    }
}

impl SwitcherConfig {
    /// Check that every name is non-blank and the default font exists.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FontError> {
        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("selector_class", &self.selector_class),
            ("event_name", &self.event_name),
        ] {
            if value.trim().is_empty() {
                return Err(FontError::Config(format!("{field} must not be empty")));
            }
        }
        if self.selector_class.chars().any(char::is_whitespace) {
            return Err(FontError::Config("selector_class must be a single class name".to_owned()));
        }
        if !catalog::is_supported(&self.default_font) {
            return Err(FontError::Config(format!(
                "default_font \"{}\" is not an available font",
                self.default_font
            )));
        }
        Ok(())
    }

    /// CSS selector matching every font control on the page.
    pub fn selector_query(&self) -> String {
        format!("select.{}", self.selector_class)
    }
}
