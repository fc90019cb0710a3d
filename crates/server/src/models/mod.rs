//! Domain models for the three resource collections.
//!
//! Each resource has two shapes:
//!
//! - a payload type (`GoodsPayload`, `UserPayload`, `OrderPayload`) - the
//!   client-supplied body without an identifier, carrying the field
//!   validation rules
//! - a record type (`Goods`, `User`, `Order`) - a full row including the
//!   store-assigned identifier, built from a validated payload via an
//!   explicit constructor or decoded from a database row

pub mod goods;
pub mod order;
pub mod user;

use serde::Serialize;

pub use goods::{Goods, GoodsPayload};
pub use order::{Order, OrderPayload};
pub use user::{User, UserPayload};

/// A validation failure on a single payload field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the constraint that failed.
    pub message: String,
}

/// One or more payload fields failed validation.
///
/// Rejected before any store access; surfaced to the client as a 422.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, thiserror::Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    /// The individual field failures.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wrap accumulated field errors, or return `Ok` if there are none.
    ///
    /// # Errors
    ///
    /// Returns `Self` when `errors` is non-empty.
    pub fn from_fields(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

/// Fixed confirmation message body, e.g. for deletes and the liveness root.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Confirmation {
    /// The fixed message text.
    pub message: &'static str,
}

/// Record a field error if `value` exceeds `max` characters.
///
/// Limits count Unicode characters, not bytes.
pub(crate) fn check_max_chars(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.chars().count() > max {
        errors.push(FieldError {
            field,
            message: format!("must be at most {max} characters"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_passes_when_empty() {
        assert!(ValidationError::from_fields(Vec::new()).is_ok());
    }

    #[test]
    fn check_max_chars_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        // Four characters, twelve bytes
        check_max_chars(&mut errors, "name", "日本語字", 4);
        assert!(errors.is_empty());

        check_max_chars(&mut errors, "name", "日本語字", 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().map(|e| e.field), Some("name"));
    }
}
