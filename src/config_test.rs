use super::*;

#[test]
fn defaults_match_page_contract() {
    let cfg = SwitcherConfig::default();
    assert_eq!(cfg.storage_key, "focus-font");
    assert_eq!(cfg.default_font, "system");
    assert_eq!(cfg.selector_class, "font-controller");
    assert_eq!(cfg.event_name, "fontChanged");
    assert_eq!(cfg.selector_sync_delay_ms, 100);
    assert!(cfg.validate().is_ok());
}

#[test]
fn selector_query_targets_select_elements() {
    let cfg = SwitcherConfig::default();
    assert_eq!(cfg.selector_query(), "select.font-controller");
}

#[test]
fn validate_rejects_blank_storage_key() {
    let cfg = SwitcherConfig { storage_key: "  ".to_owned(), ..SwitcherConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert_eq!(err, FontError::Config("storage_key must not be empty".to_owned()));
}

#[test]
fn validate_rejects_multi_word_selector_class() {
    let cfg = SwitcherConfig { selector_class: "font controller".to_owned(), ..SwitcherConfig::default() };
    assert!(matches!(cfg.validate(), Err(FontError::Config(_))));
}

#[test]
fn validate_rejects_unknown_default_font() {
    let cfg = SwitcherConfig { default_font: "papyrus".to_owned(), ..SwitcherConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("papyrus"));
}
