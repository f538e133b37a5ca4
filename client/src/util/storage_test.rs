use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::default().read(), None);
}

#[test]
fn memory_store_write_then_remove() {
    let store = MemoryStore::default();
    store.write("abc");
    assert_eq!(store.read().as_deref(), Some("abc"));
    store.remove();
    assert_eq!(store.read(), None);
}

#[test]
fn memory_store_clones_share_value() {
    let store = MemoryStore::with_value("first");
    let clone = store.clone();
    clone.write("second");
    assert_eq!(store.read().as_deref(), Some("second"));
}

#[test]
fn local_storage_store_is_inert_outside_browser() {
    let store = LocalStorageStore::new("token");
    store.write("abc");
    assert_eq!(store.read(), None);
}
