use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("user").unwrap(), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set_item("theme", "light").unwrap();
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set_item("theme", "light").unwrap();
    storage.set_item("theme", "dark").unwrap();
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_remove_deletes_key() {
    let storage = MemoryStorage::with_entries([("user", "{}")]);
    assert!(storage.contains_key("user"));
    storage.remove_item("user").unwrap();
    assert!(!storage.contains_key("user"));
}

#[test]
fn memory_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("nope").is_ok());
}

#[test]
fn memory_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v").unwrap();
    assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
}

// =============================================================
// DetachedStorage
// =============================================================

#[test]
fn detached_reads_nothing_and_accepts_writes() {
    let storage = DetachedStorage;
    storage.set_item("theme", "light").unwrap();
    assert_eq!(storage.get_item("theme").unwrap(), None);
    assert!(storage.remove_item("theme").is_ok());
}
