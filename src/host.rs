//! Page-side effects of a font change.
//!
//! DESIGN
//! ======
//! `FontSwitcher` never touches the DOM directly. The hydrate build plugs in
//! `browser::DocumentHost`; native tests use an in-memory recorder.

use crate::error::FontError;
use crate::event::FontChanged;

pub trait FontHost {
    /// Set `font-family` on the root and body elements.
    ///
    /// Implementations must leave both untouched when either is missing.
    fn apply_font_stack(&self, stack: &str) -> Result<(), FontError>;

    /// Point every element matching the CSS `selector` at `value`. Returns how many were updated.
    fn sync_selectors(&self, selector: &str, value: &str) -> Result<usize, FontError>;

    /// Broadcast `event` under `event_name` to other page scripts.
    fn dispatch_font_changed(&self, event_name: &str, event: &FontChanged) -> Result<(), FontError>;
}
