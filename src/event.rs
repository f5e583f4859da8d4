//! Font change notification payload.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::Serialize;

/// Name of the `CustomEvent` dispatched on `document` after a change.
pub const FONT_CHANGED_EVENT: &str = "fontChanged";

/// `detail` of the change event: `{"font": ..., "fontStack": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontChanged {
    pub font: String,
    pub font_stack: String,
}
