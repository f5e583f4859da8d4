//! Font picker dropdown.
//!
//! Renders a `<select>` carrying the font-control class, so switcher resyncs
//! reach it alongside any hand-written controls on the page.

#[cfg(test)]
#[path = "font_selector_test.rs"]
mod font_selector_test;

use leptos::prelude::*;

use crate::catalog::AVAILABLE_FONTS;
use crate::config::DEFAULT_SELECTOR_CLASS;

/// `(value, label)` pairs in display order.
pub fn font_options() -> Vec<(&'static str, &'static str)> {
    AVAILABLE_FONTS.iter().map(|font| (font.value, font.name)).collect()
}

/// Class attribute for the rendered `<select>`; the control class always comes first.
pub fn selector_class_attr(extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{DEFAULT_SELECTOR_CLASS} {extra}"),
        _ => DEFAULT_SELECTOR_CLASS.to_owned(),
    }
}

fn initial_font() -> String {
    #[cfg(feature = "hydrate")]
    {
        crate::browser::browser_switcher().current_font()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::catalog::DEFAULT_FONT.to_owned()
    }
}

/// Apply `value` and return the font the page now reports as current.
fn select_font(value: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let switcher = crate::browser::browser_switcher();
        switcher.change_font(value, true);
        switcher.current_font()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::catalog::lookup(value).map_or(crate::catalog::DEFAULT_FONT, |font| font.value).to_owned()
    }
}

/// Dropdown listing every available font.
#[component]
pub fn FontSelector(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let selected = RwSignal::new(initial_font());
    let class = selector_class_attr(class.as_deref());

    view! {
        <select
            class=class
            aria-label="Font"
            prop:value=move || selected.get()
            on:change=move |ev| selected.set(select_font(&event_target_value(&ev)))
        >
            {font_options()
                .into_iter()
                .map(|(value, name)| view! { <option value=value>{name}</option> })
                .collect_view()}
        </select>
    }
}
