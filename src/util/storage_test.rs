use super::*;

#[test]
fn absent_key_reads_none() {
    assert_eq!(MemoryStore::new().get("theme"), None);
}

#[test]
fn set_then_get_returns_latest_value() {
    let store = MemoryStore::new();
    store.set("theme", "dark");
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn with_entry_seeds_store() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.get("other"), None);
}
