//! Font switcher error type.
//!
//! ERROR HANDLING
//! ==============
//! Fallible internals return `Result<_, FontError>`. The page-facing API in
//! `switcher` logs these and reports a boolean, so none of them reach callers.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    #[error("invalid font provided")]
    InvalidInput,
    #[error("font \"{requested}\" is not available. Available fonts: {}", .available.join(", "))]
    Unsupported {
        requested: String,
        available: Vec<&'static str>,
    },
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("document unavailable: {0}")]
    Dom(String),
    #[error("event dispatch failed: {0}")]
    Event(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
