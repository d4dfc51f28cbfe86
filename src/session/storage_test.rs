use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("user"), Ok(None));
    assert!(!storage.contains("user"));
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("user", "{}").expect("set");
    assert_eq!(storage.get("user"), Ok(Some("{}".to_owned())));
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("user"), Ok(()));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::with_entry("user", "alice");
    let view = storage.clone();
    storage.remove("user").expect("remove");
    assert!(!view.contains("user"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_noop_natively() {
    let storage = BrowserStorage;
    storage.set("user", "alice").expect("set");
    assert_eq!(storage.get("user"), Ok(None));
    assert_eq!(storage.remove("user"), Ok(()));
}
