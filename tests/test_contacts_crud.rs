//! Integration tests for contact CRUD operations.
//!
//! These tests drive the store through a fresh in-memory backend per test,
//! the same substitution path a frontend uses for offline work.

use contact_agenda::{
    validate, ContactDraft, ContactId, ContactStore, InMemoryBackend, StorageError, ValidContact,
};
use std::sync::Arc;

mod mocks;
use mocks::FlakyBackend;

fn new_store() -> ContactStore {
    ContactStore::new(Arc::new(InMemoryBackend::new()))
}

fn fields(name: &str, email: &str, phone: &str) -> ValidContact {
    validate(&ContactDraft::new(name, email, phone)).expect("test fields must be valid")
}

#[test]
fn test_add_from_empty_collection() {
    let store = new_store();
    assert!(store.list_all().unwrap().is_empty());

    let contact = store
        .add(fields("Ana María", "ana@x.com", "5551234567"))
        .unwrap();

    assert!(!contact.id.as_str().is_empty());
    assert_eq!(contact.created_at, contact.updated_at);
    assert_eq!(contact.name.as_str(), "Ana María");

    let all = store.list_all().unwrap();
    assert_eq!(all, vec![contact]);
}

#[test]
fn test_add_grows_collection_by_one_with_unique_ids() {
    let store = new_store();
    let first = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap();
    let before = store.list_all().unwrap().len();

    let second = store
        .add(fields("Juan Pérez", "juan@x.com", "5559876543"))
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), before + 1);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_update_replaces_fields_and_refreshes_timestamp() {
    let store = new_store();
    let created = store
        .add(fields("Ana María", "ana@x.com", "5551234567"))
        .unwrap();

    let updated = store
        .update(&created.id, fields("Ana", "ana@x.com", "5550000000"))
        .unwrap()
        .expect("contact exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name.as_str(), "Ana");
    assert_eq!(updated.phone.as_str(), "5550000000");
    assert!(updated.updated_at >= created.updated_at);

    // The change is persisted, not just returned
    let all = store.list_all().unwrap();
    assert_eq!(all, vec![updated]);
}

#[test]
fn test_update_missing_id_is_not_found_and_leaves_collection_alone() {
    let store = new_store();
    let existing = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap();

    let missing = ContactId::new("does-not-exist").unwrap();
    let result = store
        .update(&missing, fields("Otro", "otro@x.com", "5550000000"))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.list_all().unwrap(), vec![existing]);
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let store = new_store();
    let first = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap();
    let second = store
        .add(fields("Juan", "juan@x.com", "5559876543"))
        .unwrap();

    assert!(store.delete(&first.id).unwrap());

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.iter().all(|c| c.id != first.id));
    assert_eq!(all[0].id, second.id);
}

#[test]
fn test_delete_missing_id_returns_false_and_leaves_collection_alone() {
    let store = new_store();
    let existing = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap();

    let missing = ContactId::new("does-not-exist").unwrap();
    assert!(!store.delete(&missing).unwrap());
    assert_eq!(store.list_all().unwrap(), vec![existing]);
}

#[test]
fn test_list_preserves_insertion_order() {
    let store = new_store();
    let names = ["Ana", "Juan", "María"];
    for name in names {
        store
            .add(fields(name, "x@x.com", "5551234567"))
            .unwrap();
    }

    let listed: Vec<String> = store
        .list_all()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str().to_string())
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn test_add_wraps_backend_write_failure() {
    let backend = Arc::new(FlakyBackend::new());
    let store = ContactStore::new(backend.clone());

    backend.fail_sets(true);
    let err = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap_err();

    assert!(matches!(err, StorageError::WriteFailure(_)));
    assert_eq!(backend.set_calls(), 1);
}

#[test]
fn test_list_wraps_backend_read_failure() {
    let backend = Arc::new(FlakyBackend::new());
    let store = ContactStore::new(backend.clone());

    backend.fail_gets(true);
    let err = store.list_all().unwrap_err();

    assert!(matches!(err, StorageError::ReadFailure(_)));
    assert_eq!(backend.get_calls(), 1);
}

#[test]
fn test_delete_wraps_backend_write_failure() {
    let backend = Arc::new(FlakyBackend::new());
    let store = ContactStore::new(backend.clone());
    let contact = store
        .add(fields("Ana", "ana@x.com", "5551234567"))
        .unwrap();

    backend.fail_sets(true);
    let err = store.delete(&contact.id).unwrap_err();
    assert!(matches!(err, StorageError::WriteFailure(_)));
}
