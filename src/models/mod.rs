//! Data structures for the persisted contact collection.

pub mod contact;

pub use contact::{Contact, REQUIRED_FIELDS};
