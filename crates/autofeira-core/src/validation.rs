//! # Validation Module
//!
//! Field validators for request bodies of the marketplace API.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Live mask on every keystroke (cpf::format / phone::format)        │
//! │  └── Immediate yes/no feedback (cpf::validate / phone::validate)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API route handler                                            │
//! │  └── THIS MODULE: typed values + ValidationError naming the field      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted database                                              │
//! │  └── stores canonical digits / centavos only                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejections are logged at `debug` with the field name, a reason code and
//! the digit count. The value itself is never logged.
//!
//! ## Usage
//! ```rust
//! use autofeira_core::validation::{validate_cpf_field, validate_price_field};
//!
//! let cpf = validate_cpf_field("buyer_cpf", "111.444.777-35").unwrap();
//! assert_eq!(cpf.as_str(), "11144477735");
//!
//! let err = validate_price_field("asking_price", "-R$ 1,00").unwrap_err();
//! assert_eq!(err.to_string(), "asking_price must be positive");
//! ```

use tracing::debug;

use crate::cpf::Cpf;
use crate::digits::extract_digits;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::phone::Phone;
use crate::MAX_PRICE_CENTAVOS;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a required CPF field.
///
/// ## Rules
/// - Must not be blank
/// - Must be a valid CPF (see [`Cpf::parse`])
///
/// ## Example
/// ```rust
/// use autofeira_core::validation::validate_cpf_field;
/// use autofeira_core::ValidationError;
///
/// assert!(validate_cpf_field("cpf", "111.444.777-35").is_ok());
/// assert!(matches!(
///     validate_cpf_field("seller_cpf", "  "),
///     Err(ValidationError::Required { .. })
/// ));
/// ```
pub fn validate_cpf_field(field: &str, value: &str) -> ValidationResult<Cpf> {
    if value.trim().is_empty() {
        return Err(rejected(required(field), 0));
    }

    Cpf::parse(value).map_err(|err| rejected(err.with_field(field), digit_count(value)))
}

/// Validates a required phone field.
pub fn validate_phone_field(field: &str, value: &str) -> ValidationResult<Phone> {
    if value.trim().is_empty() {
        return Err(rejected(required(field), 0));
    }

    Phone::parse(value).map_err(|err| rejected(err.with_field(field), digit_count(value)))
}

/// Validates an optional phone field.
///
/// Missing and blank values are both accepted as "no phone".
///
/// ## Example
/// ```rust
/// use autofeira_core::validation::validate_optional_phone_field;
///
/// assert_eq!(validate_optional_phone_field("phone", None).unwrap(), None);
/// assert_eq!(validate_optional_phone_field("phone", Some(" ")).unwrap(), None);
/// assert!(validate_optional_phone_field("phone", Some("119999")).is_err());
/// ```
pub fn validate_optional_phone_field(
    field: &str,
    value: Option<&str>,
) -> ValidationResult<Option<Phone>> {
    match value {
        Some(v) if !v.trim().is_empty() => validate_phone_field(field, v).map(Some),
        _ => Ok(None),
    }
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a vehicle price typed in Brazilian notation.
///
/// ## Rules
/// - Must not be blank
/// - Must parse (see [`Money::parse`])
/// - Must not be negative; zero is allowed ("a combinar" listings)
/// - Must not exceed [`MAX_PRICE_CENTAVOS`]
///
/// ## User Workflow
/// ```text
/// Seller types "R$ 45.990,00"
///      │
///      ▼
/// validate_price_field("asking_price", ...) ← THIS FUNCTION
///      │
///      ├── blank?        → "asking_price is required"
///      ├── "45990.00"?   → "asking_price has invalid format: ..."
///      ├── negative?     → "asking_price must be positive"
///      │
///      └── OK → Money(4_599_000) stored as centavos
/// ```
pub fn validate_price_field(field: &str, value: &str) -> ValidationResult<Money> {
    if value.trim().is_empty() {
        return Err(rejected(required(field), 0));
    }

    let digits = digit_count(value);
    let price = Money::parse(value).map_err(|err| rejected(err.with_field(field), digits))?;

    if price.is_negative() {
        return Err(rejected(
            ValidationError::MustBePositive {
                field: field.to_string(),
            },
            digits,
        ));
    }

    if price.centavos() > MAX_PRICE_CENTAVOS {
        return Err(rejected(
            ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: MAX_PRICE_CENTAVOS,
            },
            digits,
        ));
    }

    Ok(price)
}

// =============================================================================
// Helpers
// =============================================================================

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn digit_count(value: &str) -> usize {
    extract_digits(value).len()
}

/// Logs a rejection and hands the error back.
fn rejected(err: ValidationError, digits: usize) -> ValidationError {
    debug!(
        field = %err.field(),
        reason = err.reason(),
        digits = digits,
        "Rejected form field"
    );
    err
}

// =============================================================================
// Unit Tests
// =============================================================================
