//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries enough context to render an inline, per-field
/// message in a form. Precedence within a field is required, then length,
/// then pattern: a single field reports exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided name is empty after trimming.
    EmptyName,

    /// The provided name exceeds the maximum length.
    NameTooLong(usize),

    /// The provided name contains characters outside letters and whitespace.
    InvalidName(String),

    /// The provided email is empty after trimming.
    EmptyEmail,

    /// The provided email exceeds the maximum length.
    EmailTooLong(usize),

    /// The provided email address does not match the expected shape.
    InvalidEmail(String),

    /// The provided phone is empty after trimming.
    EmptyPhone,

    /// The provided phone has fewer than 7 or more than 15 characters.
    PhoneLengthOutOfRange(usize),

    /// The provided phone contains non-digit characters.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Name must be at most 80 characters (got {})", len)
            }
            Self::InvalidName(name) => {
                write!(f, "Name may only contain letters and spaces: {}", name)
            }
            Self::EmptyEmail => write!(f, "Email is required"),
            Self::EmailTooLong(len) => {
                write!(f, "Email must be at most 120 characters (got {})", len)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::EmptyPhone => write!(f, "Phone is required"),
            Self::PhoneLengthOutOfRange(_) => {
                write!(f, "Phone must contain between 7 and 15 digits")
            }
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
