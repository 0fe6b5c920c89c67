//! Indexed field names
//!
//! A field identifies a logical sub-partition of the term index — the
//! column-family restriction a scan is bound to. The name is used verbatim
//! as the restriction key.
//!
//! ## Contract
//!
//! - Field names must be non-empty
//! - Field names are matched byte-for-byte by the store; no normalization
//!   is applied here

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validated indexed field name.
///
/// # Examples
///
/// ```
/// use rowplan_core::field::Field;
///
/// let field = Field::new("text").unwrap();
/// assert_eq!(field.as_str(), "text");
///
/// assert!(Field::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field(String);

impl Field {
    /// Create a field, validating the non-empty invariant.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Empty`] for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::Empty);
        }
        Ok(Field(name))
    }

    /// Field name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Field name as raw bytes, as handed to the store restriction.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Field name is empty.
    #[error("field name cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_field() {
        let field = Field::new("user").unwrap();
        assert_eq!(field.as_str(), "user");
        assert_eq!(field.as_bytes(), b"user");
    }

    #[test]
    fn test_field_names_are_verbatim() {
        // No trimming or case folding.
        let field = Field::new("  Text ").unwrap();
        assert_eq!(field.as_str(), "  Text ");
    }

    #[test]
    fn test_empty_field_rejected() {
        assert_eq!(Field::new(""), Err(FieldError::Empty));
    }

    #[test]
    fn test_display_matches_name() {
        let field = Field::new("text").unwrap();
        assert_eq!(field.to_string(), "text");
    }

    #[test]
    fn test_serde_is_transparent() {
        let field = Field::new("text").unwrap();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, "\"text\"");
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
