//! Contact store: CRUD plus bulk export/import over a pluggable backend.
//!
//! The store owns the persisted collection. Every mutating operation is a
//! read-modify-write of the whole blob under one fixed key: read the
//! current collection, apply the change, write the collection back. No
//! partial-record writes, no locking; the store assumes a single logical
//! writer.

use crate::backend::KeyValueBackend;
use crate::domain::ContactId;
use crate::error::{StorageError, StoreResult};
use crate::models::{Contact, REQUIRED_FIELDS};
use crate::validation::ValidContact;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Backend key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "contactos_agenda";

/// The contact collection, persisted as a single JSON blob.
///
/// `add` and `update` accept only `ValidContact`, so data that skipped the
/// validator cannot reach a write path. Import re-runs the same field rules
/// on every record, since that path bypasses the form entirely.
pub struct ContactStore {
    backend: Arc<dyn KeyValueBackend>,
    key: String,
}

impl ContactStore {
    /// Create a store over `backend` using the default collection key.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Create a store over `backend` using a custom collection key.
    pub fn with_key(backend: Arc<dyn KeyValueBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the full collection.
    ///
    /// An absent blob is an empty collection. A blob that parses as JSON
    /// but is not an array is treated as corrupted and degrades to an
    /// empty collection with a diagnostic log, so a best-effort listing
    /// never blocks the caller from rendering an empty state. A blob that
    /// does not parse at all, or whose records do not decode as contacts,
    /// surfaces as `ReadFailure`: malformed encoding may indicate a more
    /// serious problem than a shape mismatch.
    pub fn list_all(&self) -> StoreResult<Vec<Contact>> {
        let raw = self
            .backend
            .get(&self.key)
            .map_err(|e| StorageError::ReadFailure(e.to_string()))?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        let value: Value =
            serde_json::from_str(&raw).map_err(|e| StorageError::ReadFailure(e.to_string()))?;

        if !value.is_array() {
            warn!(key = %self.key, "persisted blob is not an array, treating as empty");
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| StorageError::ReadFailure(e.to_string()))
    }

    /// Add a new contact from validated fields.
    ///
    /// Assigns a fresh random id and sets both timestamps to now, appends
    /// to the collection, and persists. Returns the new record.
    pub fn add(&self, fields: ValidContact) -> StoreResult<Contact> {
        let mut contacts = self.list_all()?;

        let now = Utc::now();
        let contact = Contact {
            id: ContactId::generate(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            created_at: now,
            updated_at: now,
        };

        contacts.push(contact.clone());
        self.persist(&contacts)?;

        debug!(id = %contact.id, "added contact");
        Ok(contact)
    }

    /// Update an existing contact's fields.
    ///
    /// Returns `Ok(None)` when no record has the given id: not-found is an
    /// expected outcome the caller handles distinctly from failure. On a
    /// hit, the mutable fields are replaced, `updated_at` is refreshed,
    /// and `id`/`created_at` are untouched.
    pub fn update(&self, id: &ContactId, fields: ValidContact) -> StoreResult<Option<Contact>> {
        let mut contacts = self.list_all()?;

        let Some(existing) = contacts.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };

        existing.name = fields.name;
        existing.email = fields.email;
        existing.phone = fields.phone;
        existing.updated_at = Utc::now();
        let updated = existing.clone();

        self.persist(&contacts)?;

        debug!(id = %id, "updated contact");
        Ok(Some(updated))
    }

    /// Delete the contact with the given id.
    ///
    /// Returns whether a record was actually removed. When nothing
    /// matches, the collection is not rewritten.
    pub fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        let contacts = self.list_all()?;

        let filtered: Vec<Contact> = contacts.iter().filter(|c| &c.id != id).cloned().collect();
        if filtered.len() == contacts.len() {
            return Ok(false);
        }

        self.persist(&filtered)?;

        debug!(id = %id, "deleted contact");
        Ok(true)
    }

    /// Serialize the full collection to pretty-printed JSON.
    pub fn export_all(&self) -> StoreResult<String> {
        let contacts = self.list_all()?;
        serde_json::to_string_pretty(&contacts)
            .map_err(|e| StorageError::WriteFailure(e.to_string()))
    }

    /// Replace the collection with the contents of a JSON payload.
    ///
    /// The payload must be a JSON array of contact records, each carrying
    /// all six transfer-format fields. Field rules are re-validated on
    /// every record and ids must be unique. On success the imported
    /// collection replaces the existing one entirely; on any failure the
    /// existing collection is untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` when the payload is not parseable JSON
    /// - `InvalidStructure` when the parsed value is not an array, an
    ///   entry is missing a required field, an entry fails the field
    ///   rules, or two entries share an id
    /// - `WriteFailure` when persisting the imported collection fails
    pub fn import_all(&self, payload: &str) -> StoreResult<()> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| StorageError::InvalidFormat(e.to_string()))?;

        let Some(entries) = value.as_array() else {
            return Err(StorageError::InvalidStructure(
                "payload is not an array of contacts".to_string(),
            ));
        };

        let mut contacts: Vec<Contact> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let Some(obj) = entry.as_object() else {
                return Err(StorageError::InvalidStructure(format!(
                    "entry {} is not an object",
                    index
                )));
            };

            for field in REQUIRED_FIELDS {
                let present = match obj.get(field) {
                    Some(Value::String(s)) => !s.is_empty(),
                    Some(Value::Null) | None => false,
                    Some(_) => true,
                };
                if !present {
                    return Err(StorageError::InvalidStructure(format!(
                        "entry {} is missing required field \"{}\"",
                        index, field
                    )));
                }
            }

            let contact: Contact = serde_json::from_value(entry.clone())
                .map_err(|e| StorageError::InvalidStructure(format!("entry {}: {}", index, e)))?;

            if contacts.iter().any(|c| c.id == contact.id) {
                return Err(StorageError::InvalidStructure(format!(
                    "entry {} repeats id \"{}\"",
                    index, contact.id
                )));
            }

            contacts.push(contact);
        }

        self.persist(&contacts)?;

        info!(count = contacts.len(), "imported contact collection");
        Ok(())
    }

    /// Write the whole collection back under the store key.
    fn persist(&self, contacts: &[Contact]) -> StoreResult<()> {
        let blob = serde_json::to_string(contacts)
            .map_err(|e| StorageError::WriteFailure(e.to_string()))?;
        self.backend
            .set(&self.key, &blob)
            .map_err(|e| StorageError::WriteFailure(e.to_string()))
    }
}
