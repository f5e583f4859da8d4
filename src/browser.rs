//! `web-sys` implementations of the storage and host seams.
//!
//! Requires a browser environment; only compiled with `hydrate`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, HtmlSelectElement, Storage};

use crate::error::FontError;
use crate::event::FontChanged;
use crate::host::FontHost;
use crate::prefs::PreferenceStore;
use crate::switcher::FontSwitcher;

/// Switcher bound to `window.localStorage` and `window.document`.
pub type BrowserSwitcher = FontSwitcher<LocalStorage, DocumentHost>;

pub fn browser_switcher() -> BrowserSwitcher {
    FontSwitcher::new(LocalStorage, DocumentHost)
}

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn document() -> Result<Document, FontError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FontError::Dom("no window.document".to_owned()))
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`, resolved on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, FontError> {
        let window = web_sys::window().ok_or_else(|| FontError::Storage("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(FontError::Storage("localStorage is disabled".to_owned())),
            Err(err) => Err(FontError::Storage(js_error(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FontError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| FontError::Storage(js_error(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FontError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| FontError::Storage(js_error(&err)))
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

impl FontHost for DocumentHost {
    fn apply_font_stack(&self, stack: &str) -> Result<(), FontError> {
        let doc = document()?;
        let root = doc
            .document_element()
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
            .ok_or_else(|| FontError::Dom("no <html> element".to_owned()))?;
        let body = doc
            .body()
            .ok_or_else(|| FontError::Dom("no <body> element".to_owned()))?;

        for el in [&root, &body] {
            el.style()
                .set_property("font-family", stack)
                .map_err(|err| FontError::Dom(js_error(&err)))?;
        }
        Ok(())
    }

    fn sync_selectors(&self, selector: &str, value: &str) -> Result<usize, FontError> {
        let doc = document()?;
        let nodes = doc
            .query_selector_all(selector)
            .map_err(|err| FontError::Dom(js_error(&err)))?;

        let mut updated = 0;
        for idx in 0..nodes.length() {
            let Some(node) = nodes.item(idx) else {
                continue;
            };
            if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
                select.set_value(value);
                updated += 1;
            }
        }
        Ok(updated)
    }

    fn dispatch_font_changed(&self, event_name: &str, event: &FontChanged) -> Result<(), FontError> {
        let raw = serde_json::to_string(event).map_err(|err| FontError::Event(err.to_string()))?;
        let detail = js_sys::JSON::parse(&raw).map_err(|err| FontError::Event(js_error(&err)))?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let custom = CustomEvent::new_with_event_init_dict(event_name, &init)
            .map_err(|err| FontError::Event(js_error(&err)))?;

        document()?
            .dispatch_event(&custom)
            .map(|_delivered| ())
            .map_err(|err| FontError::Event(js_error(&err)))
    }
}
