//! Contact Agenda - a local contact-book manager.
//!
//! This library provides the core of a single-user contact book: validated
//! create/update/delete/list over a persisted collection, plus JSON
//! export/import. Persistence goes through a pluggable key-value backend;
//! rendering and user interaction belong to the thin CLI frontend.
//!
//! # Architecture
//!
//! - **domain**: Value objects validated at construction (id, name, email, phone)
//! - **validation**: Whole-draft validation collecting one error per field
//! - **models**: The persisted Contact record
//! - **backend**: Key-value persistence (file-backed, in-memory)
//! - **store**: CRUD + export/import over a backend
//! - **error**: Storage, backend, and configuration error types
//! - **config**: Configuration from environment variables

pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use backend::{FileBackend, InMemoryBackend, KeyValueBackend};
pub use config::Config;
pub use domain::{ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError};
pub use error::{BackendError, ConfigError, StorageError, StoreResult};
pub use models::Contact;
pub use store::{ContactStore, STORAGE_KEY};
pub use validation::{validate, ContactDraft, FieldErrors, ValidContact};
