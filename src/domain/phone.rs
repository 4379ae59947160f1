//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Anchored full-match: digits only. Length is checked separately so that
// out-of-range input reports the range message rather than the pattern one.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));

const PHONE_MIN_CHARS: usize = 7;
const PHONE_MAX_CHARS: usize = 15;

/// A type-safe wrapper for phone numbers.
///
/// Stored as a plain digit string of 7 to 15 digits, no formatting
/// characters, no leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, trimming and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - 7 to 15 characters
    /// - Digits only
    ///
    /// # Errors
    ///
    /// Returns the first applicable error in required > length > pattern
    /// order.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if phone.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        let len = phone.chars().count();
        if !(PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&len) {
            return Err(ValidationError::PhoneLengthOutOfRange(len));
        }

        if !PHONE_REGEX.is_match(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(phone.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
