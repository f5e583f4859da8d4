//! JS-facing exports and module start-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts call `changeFont`, `getCurrentFont`, `getSavedFont`,
//! `initializeFont`, `updateFontSelectors`, and `getAvailableFonts` from the
//! generated module. The host app calls `initFontSwitcher` once; with the
//! `auto-start` feature the module calls it on load instead. Either way the
//! font is initialized as soon as the document is parsed, then the controls
//! are resynced once more after a short delay for widgets mounted late.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::browser::browser_switcher;
use crate::catalog;

#[cfg(feature = "auto-start")]
#[wasm_bindgen(start)]
pub fn auto_start() {
    init();
}

/// Install the panic hook and initialize the font once the document is parsed.
#[wasm_bindgen(js_name = initFontSwitcher)]
pub fn init() {
    console_error_panic_hook::set_once();

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::warn!("Font switcher: no document, skipping initialization");
        return;
    };

    if doc.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            initialize_font();
        });
        if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            leptos::logging::warn!("Font switcher: could not wait for DOMContentLoaded: {err:?}");
        }
    } else {
        initialize_font();
    }
}

/// Apply `font`, persisting unless `persist` is `false`.
#[wasm_bindgen(js_name = changeFont)]
pub fn change_font(font: JsValue, persist: Option<bool>) -> bool {
    let Some(font) = font.as_string() else {
        leptos::logging::warn!("Font switcher: Invalid font provided");
        return false;
    };
    browser_switcher().change_font(&font, persist.unwrap_or(true))
}

#[wasm_bindgen(js_name = getCurrentFont)]
pub fn get_current_font() -> String {
    browser_switcher().current_font()
}

#[wasm_bindgen(js_name = getSavedFont)]
pub fn get_saved_font() -> Option<String> {
    browser_switcher().saved_font()
}

/// Apply the saved (or default) font and schedule a follow-up selector resync.
#[wasm_bindgen(js_name = initializeFont)]
pub fn initialize_font() -> bool {
    let switcher = browser_switcher();
    let applied = switcher.initialize_font();
    Timeout::new(switcher.config().selector_sync_delay_ms, || {
        update_font_selectors();
    })
    .forget();
    applied
}

#[wasm_bindgen(js_name = updateFontSelectors)]
pub fn update_font_selectors() -> usize {
    browser_switcher().update_font_selectors()
}

/// Array of `{value, name, stack}` objects.
///
/// # Errors
///
/// Throws when the table cannot be converted to a JS value.
#[wasm_bindgen(js_name = getAvailableFonts)]
pub fn get_available_fonts() -> Result<JsValue, JsValue> {
    let raw = serde_json::to_string(&catalog::available_fonts())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    js_sys::JSON::parse(&raw)
}
