//! # Error Types
//!
//! Domain-specific error types for autofeira-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  autofeira-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Route handlers (outside this workspace)                               │
//! │  └── map ValidationError → 400 response with `field` + message         │
//! │                                                                         │
//! │  Flow: user text → Cpf::parse / validate_*_field → ValidationError     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the field name in error messages
//! 3. NEVER include the rejected value: CPFs and phone numbers are personal data
//! 4. Errors are enum variants, never String
//!
//! The plain `validate` functions in [`crate::cpf`] and [`crate::phone`]
//! never produce errors at all; they answer with a `bool`. These types are
//! for the typed constructors and the field validators.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a route handler forwards data to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Wrong number of digits after stripping punctuation.
    ///
    /// ## When This Occurs
    /// - CPF with anything other than 11 digits
    /// - Phone with anything other than 10 or 11 digits
    #[error("{field} must have {expected} digits, got {actual}")]
    InvalidLength {
        field: String,
        expected: String,
        actual: usize,
    },

    /// Every digit is the same (e.g. "111.111.111-11").
    ///
    /// These sequences pass the checksum but are never issued.
    #[error("{field} cannot be a repeated single digit")]
    RepeatedDigits { field: String },

    /// A check digit does not match the one computed from the preceding digits.
    ///
    /// `position` is 1 for the first check digit (10th digit) and 2 for the
    /// second (11th digit).
    ///
    /// ## User Workflow
    /// ```text
    /// Seller types CPF "111.444.777-36"
    ///      │
    ///      ▼
    /// second check digit: expected 5, got 6
    ///      │
    ///      ▼
    /// CheckDigitMismatch { field: "cpf", position: 2 }
    ///      │
    ///      ▼
    /// UI shows: "cpf has an invalid check digit (2)"
    /// ```
    #[error("{field} has an invalid check digit ({position})")]
    CheckDigitMismatch { field: String, position: u8 },

    /// Invalid format (e.g. unparseable price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::RepeatedDigits { field }
            | ValidationError::CheckDigitMismatch { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field } => field,
        }
    }

    /// Re-labels the error with the caller's field name.
    ///
    /// Typed constructors such as `Cpf::parse` report a generic field
    /// ("cpf"); form validators rename it to the request-body key
    /// ("buyer_cpf", "seller_phone", ...).
    pub fn with_field(mut self, name: &str) -> Self {
        match &mut self {
            ValidationError::Required { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::RepeatedDigits { field }
            | ValidationError::CheckDigitMismatch { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field } => *field = name.to_string(),
        }
        self
    }

    /// Short machine-readable reason, used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "required",
            ValidationError::InvalidLength { .. } => "invalid_length",
            ValidationError::RepeatedDigits { .. } => "repeated_digits",
            ValidationError::CheckDigitMismatch { .. } => "check_digit_mismatch",
            ValidationError::InvalidFormat { .. } => "invalid_format",
            ValidationError::OutOfRange { .. } => "out_of_range",
            ValidationError::MustBePositive { .. } => "must_be_positive",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidLength {
            field: "cpf".to_string(),
            expected: "11".to_string(),
            actual: 9,
        };
        assert_eq!(err.to_string(), "cpf must have 11 digits, got 9");

        let err = ValidationError::CheckDigitMismatch {
            field: "cpf".to_string(),
            position: 2,
        };
        assert_eq!(err.to_string(), "cpf has an invalid check digit (2)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "buyer_cpf".to_string(),
        };
        assert_eq!(err.to_string(), "buyer_cpf is required");

        let err = ValidationError::RepeatedDigits {
            field: "cpf".to_string(),
        };
        assert_eq!(err.to_string(), "cpf cannot be a repeated single digit");
    }

    #[test]
    fn test_with_field_relabels() {
        let err = ValidationError::RepeatedDigits {
            field: "cpf".to_string(),
        }
        .with_field("seller_cpf");
        assert_eq!(err.field(), "seller_cpf");
        assert_eq!(err.reason(), "repeated_digits");
    }
}
