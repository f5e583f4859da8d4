//! Font switching: validate, apply, persist, resync, notify.
//!
//! DESIGN
//! ======
//! `FontSwitcher` is an explicitly constructed preferences-plus-host object
//! instead of page globals. Each step after validation is best-effort: a
//! storage, selector, or event failure is logged and the change still counts,
//! while a failure to restyle the document fails the change.
//!
//! ERROR HANDLING
//! ==============
//! `try_change_font` reports failures as `FontError`. The boolean methods are
//! the page-facing surface and never propagate errors.

#[cfg(test)]
#[path = "switcher_test.rs"]
mod switcher_test;

use crate::catalog::{self, FontDescriptor};
use crate::config::SwitcherConfig;
use crate::error::FontError;
use crate::event::FontChanged;
use crate::host::FontHost;
use crate::prefs::{FontPreferences, PreferenceStore};

/// Outcome of a successful change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontChange {
    pub font: &'static FontDescriptor,
    /// Whether the identifier reached storage.
    pub persisted: bool,
}

pub struct FontSwitcher<S, H> {
    prefs: FontPreferences<S>,
    host: H,
    config: SwitcherConfig,
}

impl<S: PreferenceStore, H: FontHost> FontSwitcher<S, H> {
    /// Build a switcher with the default configuration.
    pub fn new(store: S, host: H) -> Self {
        Self::from_parts(store, host, SwitcherConfig::default())
    }

    /// Build a switcher with `config`, rejecting invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Config`] when `config` fails validation.
    pub fn with_config(store: S, host: H, config: SwitcherConfig) -> Result<Self, FontError> {
        config.validate()?;
        Ok(Self::from_parts(store, host, config))
    }

    fn from_parts(store: S, host: H, config: SwitcherConfig) -> Self {
        let prefs = FontPreferences::new(store, config.storage_key.clone(), config.default_font.clone());
        Self { prefs, host, config }
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Apply `input` and report success. Failures are logged, never raised.
    pub fn change_font(&self, input: &str, persist: bool) -> bool {
        match self.try_change_font(input, persist) {
            Ok(_) => true,
            Err(err @ (FontError::InvalidInput | FontError::Unsupported { .. })) => {
                leptos::logging::warn!("Font switcher: {err}");
                false
            }
            Err(err) => {
                leptos::logging::error!("Font switcher: Error changing font: {err}");
                false
            }
        }
    }

    /// Apply `input`, returning the matched descriptor.
    ///
    /// Nothing is mutated unless `input` names a supported font.
    ///
    /// # Errors
    ///
    /// - [`FontError::InvalidInput`] for empty input.
    /// - [`FontError::Unsupported`] for unknown identifiers, including whitespace-only input.
    /// - Whatever the host reports when the document cannot be restyled.
    pub fn try_change_font(&self, input: &str, persist: bool) -> Result<FontChange, FontError> {
        if input.is_empty() {
            return Err(FontError::InvalidInput);
        }
        let normalized = catalog::normalize(input);
        let font = catalog::find(&normalized).ok_or_else(|| FontError::Unsupported {
            requested: input.to_owned(),
            available: catalog::available_values(),
        })?;

        self.host.apply_font_stack(font.stack)?;

        let mut persisted = false;
        if persist {
            match self.prefs.save(font.value) {
                Ok(()) => persisted = true,
                Err(err) => leptos::logging::warn!("Font switcher: Could not save font to localStorage: {err}"),
            }
        }

        self.update_font_selectors();

        let event = FontChanged {
            font: font.value.to_owned(),
            font_stack: font.stack.to_owned(),
        };
        if let Err(err) = self.host.dispatch_font_changed(&self.config.event_name, &event) {
            leptos::logging::warn!("Font switcher: {err}");
        }

        Ok(FontChange { font, persisted })
    }

    /// Persisted identifier, or the configured default.
    pub fn current_font(&self) -> String {
        self.prefs.current()
    }

    /// Persisted identifier, if any. Storage failures are logged.
    pub fn saved_font(&self) -> Option<String> {
        match self.prefs.load() {
            Ok(saved) => saved,
            Err(err) => {
                leptos::logging::warn!("Font switcher: Could not access localStorage: {err}");
                None
            }
        }
    }

    /// Apply the saved font, or apply and persist the default.
    pub fn initialize_font(&self) -> bool {
        match self.saved_font() {
            Some(saved) if catalog::is_supported(&saved) => self.change_font(&saved, false),
            _ => {
                let default_font = self.config.default_font.clone();
                self.change_font(&default_font, true)
            }
        }
    }

    /// Point every font control at the current font. Returns how many were updated.
    pub fn update_font_selectors(&self) -> usize {
        let current = self.current_font();
        match self.host.sync_selectors(&self.config.selector_query(), &current) {
            Ok(count) => count,
            Err(err) => {
                leptos::logging::warn!("Font switcher: Could not update font selectors: {err}");
                0
            }
        }
    }

    pub fn available_fonts(&self) -> Vec<FontDescriptor> {
        catalog::available_fonts()
    }
}
