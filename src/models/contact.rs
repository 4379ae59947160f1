//! Contact model, the sole persisted entity.

use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record in the agenda.
///
/// Field names in the serialized form are the transfer-format names and
/// survive an export/import round-trip unchanged. The typed fields mean a
/// record that violates the field rules cannot be represented: decoding a
/// persisted or imported blob re-runs the same validation the form path
/// uses.
///
/// `id` and `created_at` are immutable after creation; `updated_at` is
/// refreshed on every successful update and `created_at <= updated_at`
/// always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned by the store at creation
    pub id: ContactId,

    /// Full name
    pub name: PersonName,

    /// Email address
    pub email: EmailAddress,

    /// Phone number (digits only)
    pub phone: PhoneNumber,

    /// Creation timestamp, set once
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Last-modified timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The serialized field names every imported record must carry.
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "name", "email", "phone", "createdAt", "updatedAt"];
