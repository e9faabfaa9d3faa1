//! FieldError for field set accessors

/// Error type for field access operations on a field set.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The requested field is not part of the field set's schema.
    #[error("Field '{field}' not found in schema")]
    Missing { field: String },

    /// The field exists but was given a value of a different kind.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The key does not follow the custom field naming convention.
    #[error("Field '{field}' is not a custom field (expected prefix '{prefix}')")]
    NotExtension { field: String, prefix: &'static str },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a new error for a key outside the custom field namespace.
    pub fn not_extension(field: impl Into<String>, prefix: &'static str) -> Self {
        Self::NotExtension {
            field: field.into(),
            prefix,
        }
    }
}
