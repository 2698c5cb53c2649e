//! Shared validation primitives and the `Record` trait.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a domain value fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty or whitespace-only.
    #[error("value must not be empty")]
    Empty,
    /// The value exceeds the maximum length.
    #[error("value exceeds maximum length of {max} characters (got {got})")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        got: usize,
    },
}

/// Maximum length accepted for display names.
pub const MAX_NAME_LEN: usize = 200;

/// Validate a display name: non-empty after trimming, at most
/// [`MAX_NAME_LEN`] characters.
///
/// # Errors
///
/// Returns [`ValidationError`] if the name is empty, whitespace-only,
/// or too long.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            max: MAX_NAME_LEN,
            got: name.len(),
        });
    }
    Ok(())
}

/// A stored record with a stable identity and a last-modified timestamp.
///
/// Every marketplace entity implements this; directories use it for
/// lookups and for the deterministic result ordering (most recently
/// updated first, ties broken by ascending id).
pub trait Record {
    /// Opaque unique identifier.
    fn id(&self) -> Uuid;
    /// Timestamp of the last modification.
    fn updated_at(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_rejected() {
        assert_eq!(validate_name(""), Err(ValidationError::Empty));
        assert_eq!(validate_name("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn overlong_name_rejected() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            validate_name(&long),
            Err(ValidationError::TooLong {
                max: MAX_NAME_LEN,
                got: MAX_NAME_LEN + 1
            })
        );
    }

    #[test]
    fn ordinary_name_accepted() {
        assert_eq!(validate_name("TechStart Inc."), Ok(()));
    }
}
