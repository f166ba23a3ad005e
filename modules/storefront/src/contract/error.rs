//! Contract error types for the storefront store
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Storefront store errors
///
/// The constraint variants are raised by the database engine and only classified here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Duplicate value in a unique column (username, email, category name, discount code)
    #[error("unique constraint violated: {detail}")]
    UniqueViolation { detail: String },

    /// Reference to a parent row that does not exist, or delete of a restricted parent
    #[error("foreign key constraint violated: {detail}")]
    ForeignKeyViolation { detail: String },

    /// Required column left empty
    #[error("not-null constraint violated: {detail}")]
    NotNullViolation { detail: String },

    /// Column CHECK rejected the value (role, discount type, negative stock)
    #[error("check constraint violated: {detail}")]
    CheckViolation { detail: String },

    /// Row not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (user, product, order, ...)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Input rejected before reaching the database
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any other database failure
    #[error("database error: {0}")]
    Database(String),
}

impl StorefrontError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True for the variants reported by a declared schema constraint
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::UniqueViolation { .. }
                | Self::ForeignKeyViolation { .. }
                | Self::NotNullViolation { .. }
                | Self::CheckViolation { .. }
        )
    }
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_renders_resource_and_id() {
        let err = StorefrontError::not_found("product", 42);
        assert_eq!(err.to_string(), "product not found: 42");
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn constraint_variants_are_flagged() {
        let err = StorefrontError::UniqueViolation {
            detail: "users.email".into(),
        };
        assert!(err.is_constraint_violation());
    }
}
