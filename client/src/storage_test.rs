use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("missing"), None);

    storage.set("key", "value");
    assert_eq!(storage.get("key").as_deref(), Some("value"));
}

#[test]
fn memory_storage_overwrites_in_place() {
    let storage = MemoryStorage::new();
    storage.set("key", "first");
    storage.set("key", "second");
    assert_eq!(storage.get("key").as_deref(), Some("second"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.set("key", "value");
    storage.remove("key");
    storage.remove("key");
    assert!(storage.is_empty());
    assert_eq!(storage.get("key"), None);
}

#[test]
fn clones_share_the_same_entries() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.set("key", "value");
    assert_eq!(view.get("key").as_deref(), Some("value"));
}

#[test]
fn default_backend_is_usable_off_wasm() {
    let backend = default_backend();
    backend.set("key", "value");
    assert_eq!(backend.get("key").as_deref(), Some("value"));
}
