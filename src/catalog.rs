//! Curated font table.
//!
//! The table is fixed at compile time. Identifiers are lowercase and unique;
//! user input is normalized (trimmed, lowercased) before lookup.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

/// Identifier applied when nothing valid is stored.
pub const DEFAULT_FONT: &str = "system";

/// A named CSS `font-family` fallback stack offered as a user-selectable option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontDescriptor {
    /// Short unique identifier, also the persisted value.
    pub value: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Ordered CSS fallback list.
    pub stack: &'static str,
}

pub const AVAILABLE_FONTS: [FontDescriptor; 5] = [
    FontDescriptor {
        value: "system",
        name: "System",
        stack: r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#,
    },
    FontDescriptor {
        value: "serif",
        name: "Serif",
        stack: r#"Georgia, "Times New Roman", Times, serif"#,
    },
    FontDescriptor {
        value: "mono",
        name: "Mono",
        stack: r#""SF Mono", Monaco, "Cascadia Code", "Roboto Mono", Consolas, "Courier New", monospace"#,
    },
    FontDescriptor {
        value: "classic",
        name: "Classic",
        stack: r#"Garamond, Baskerville, "Baskerville Old Face", "Hoefler Text", "Times New Roman", serif"#,
    },
    FontDescriptor {
        value: "reader",
        name: "Reader",
        stack: r#""Charter", "Bitstream Charter", "Sitka Text", Cambria, serif"#,
    },
];

/// Owned copy of the font table.
pub fn available_fonts() -> Vec<FontDescriptor> {
    AVAILABLE_FONTS.to_vec()
}

/// Identifiers of every supported font, in table order.
pub fn available_values() -> Vec<&'static str> {
    AVAILABLE_FONTS.iter().map(|font| font.value).collect()
}

/// Exact-match lookup by identifier.
pub fn find(value: &str) -> Option<&'static FontDescriptor> {
    AVAILABLE_FONTS.iter().find(|font| font.value == value)
}

/// Canonical form of user input: trimmed and lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize `raw` and look it up. Blank input never matches.
pub fn lookup(raw: &str) -> Option<&'static FontDescriptor> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    find(&normalized)
}

/// Whether `value` is a supported identifier as stored (no normalization).
pub fn is_supported(value: &str) -> bool {
    find(value).is_some()
}
