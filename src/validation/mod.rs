//! Whole-draft contact validation.
//!
//! The form-facing entry point to the domain value objects: takes the raw
//! field strings a caller collected, checks every field independently, and
//! returns either the validated fields or one error per invalid field.
//! Pure functions, no side effects, no I/O.

use crate::domain::{EmailAddress, PersonName, PhoneNumber, ValidationError};
use std::fmt;

/// Raw, unvalidated field input for a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The validated fields of a contact, ready for a store write.
///
/// Holding value objects rather than strings means a draft that skipped
/// validation cannot reach `add` or `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

/// Per-field validation errors, at most one per field.
///
/// This is a normal result used to annotate a form, not an exception:
/// callers check it and re-render inline messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub phone: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Iterate `(field, message)` pairs in field order.
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(e) = &self.name {
            out.push(("name", e.to_string()));
        }
        if let Some(e) = &self.email {
            out.push(("email", e.to_string()));
        }
        if let Some(e) = &self.phone {
            out.push(("phone", e.to_string()));
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .messages()
            .into_iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Validate a draft, checking all three fields independently.
///
/// Unlike a fail-fast chain, every field is checked so the caller gets the
/// full error set in one pass. Within a field the precedence is required >
/// length > pattern, producing exactly one message per invalid field.
pub fn validate(draft: &ContactDraft) -> Result<ValidContact, FieldErrors> {
    let name = PersonName::new(&draft.name);
    let email = EmailAddress::new(&draft.email);
    let phone = PhoneNumber::new(&draft.phone);

    match (name, email, phone) {
        (Ok(name), Ok(email), Ok(phone)) => Ok(ValidContact { name, email, phone }),
        (name, email, phone) => Err(FieldErrors {
            name: name.err(),
            email: email.err(),
            phone: phone.err(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, phone: &str) -> ContactDraft {
        ContactDraft::new(name, email, phone)
    }

    #[test]
    fn test_validate_accepts_valid_draft() {
        let valid = validate(&draft("Ana María", "ana@x.com", "5551234567")).unwrap();
        assert_eq!(valid.name.as_str(), "Ana María");
        assert_eq!(valid.email.as_str(), "ana@x.com");
        assert_eq!(valid.phone.as_str(), "5551234567");
    }

    #[test]
    fn test_validate_reports_all_invalid_fields_at_once() {
        let errors = validate(&draft("", "no-at-sign", "123")).unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::EmptyName));
        assert!(matches!(errors.email, Some(ValidationError::InvalidEmail(_))));
        assert_eq!(
            errors.phone,
            Some(ValidationError::PhoneLengthOutOfRange(3))
        );
        assert_eq!(errors.messages().len(), 3);
    }

    #[test]
    fn test_validate_single_field_failure_leaves_others_clear() {
        let errors = validate(&draft("Ana", "ana@x.com", "12-345-678")).unwrap_err();
        assert!(errors.name.is_none());
        assert!(errors.email.is_none());
        assert!(matches!(errors.phone, Some(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_validate_trims_before_checking() {
        let valid = validate(&draft("  Ana  ", " ana@x.com ", " 5551234567 ")).unwrap();
        assert_eq!(valid.name.as_str(), "Ana");
        assert_eq!(valid.email.as_str(), "ana@x.com");
        assert_eq!(valid.phone.as_str(), "5551234567");
    }

    #[test]
    fn test_required_takes_precedence_over_pattern() {
        // Whitespace-only input trims to empty: the required message wins,
        // not a confusing pattern one.
        let errors = validate(&draft("   ", "   ", "   ")).unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::EmptyName));
        assert_eq!(errors.email, Some(ValidationError::EmptyEmail));
        assert_eq!(errors.phone, Some(ValidationError::EmptyPhone));
    }

    #[test]
    fn test_length_takes_precedence_over_pattern() {
        // 81 digits: fails both length and pattern for name; length reported.
        let errors = validate(&draft(&"1".repeat(81), "ana@x.com", "5551234567")).unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::NameTooLong(81)));
    }

    #[test]
    fn test_field_errors_display() {
        let errors = validate(&draft("Ana", "bad", "5551234567")).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.starts_with("email: "));
        assert!(rendered.contains("Invalid email address"));
    }
}
