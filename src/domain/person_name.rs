//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Anchored full-match: letters (ASCII and accented Latin) and whitespace only.
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").expect("valid name regex"));

const NAME_MAX_CHARS: usize = 80;

/// A type-safe wrapper for contact names.
///
/// Input is trimmed of surrounding whitespace and validated at construction
/// time. The stored value is the trimmed form.
///
/// # Example
///
/// ```
/// use contact_agenda::domain::PersonName;
///
/// let name = PersonName::new("  Ana María  ").unwrap();
/// assert_eq!(name.as_str(), "Ana María");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, trimming and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - At most 80 characters
    /// - Letters (including accented Latin letters) and whitespace only
    ///
    /// # Errors
    ///
    /// Returns the first applicable error in required > length > pattern
    /// order.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let len = name.chars().count();
        if len > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong(len));
        }

        if !NAME_REGEX.is_match(name) {
            return Err(ValidationError::InvalidName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
