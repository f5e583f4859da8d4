use super::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, FontError> {
        Err(FontError::Storage("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), FontError> {
        Err(FontError::Storage("QuotaExceededError".to_owned()))
    }
}

#[test]
fn load_is_none_when_nothing_saved() {
    let prefs = FontPreferences::new(MemoryStore::new(), "focus-font", "system");
    assert_eq!(prefs.load(), Ok(None));
    assert_eq!(prefs.current(), "system");
}

#[test]
fn save_then_load_round_trips_under_key() {
    let store = MemoryStore::new();
    let prefs = FontPreferences::new(store.clone(), "focus-font", "system");
    prefs.save("mono").unwrap();
    assert_eq!(prefs.load(), Ok(Some("mono".to_owned())));
    assert_eq!(store.get("focus-font"), Ok(Some("mono".to_owned())));
    assert_eq!(prefs.current(), "mono");
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    store.set("focus-font", "serif").unwrap();
    let reloaded = FontPreferences::new(store.clone(), "focus-font", "system");
    assert_eq!(reloaded.current(), "serif");
}

#[test]
fn current_treats_empty_value_as_unset() {
    let store = MemoryStore::new();
    store.set("focus-font", "").unwrap();
    let prefs = FontPreferences::new(store, "focus-font", "system");
    assert_eq!(prefs.current(), "system");
}

#[test]
fn current_falls_back_to_default_when_storage_fails() {
    let prefs = FontPreferences::new(BrokenStore, "focus-font", "reader");
    assert!(prefs.load().is_err());
    assert_eq!(prefs.current(), "reader");
}

#[test]
fn save_surfaces_storage_error() {
    let prefs = FontPreferences::new(BrokenStore, "focus-font", "system");
    assert_eq!(
        prefs.save("serif"),
        Err(FontError::Storage("QuotaExceededError".to_owned()))
    );
}

#[test]
fn keys_are_isolated() {
    let store = MemoryStore::new();
    let a = FontPreferences::new(store.clone(), "a", "system");
    let b = FontPreferences::new(store, "b", "system");
    a.save("classic").unwrap();
    assert_eq!(b.load(), Ok(None));
    assert_eq!(a.load(), Ok(Some("classic".to_owned())));
}
