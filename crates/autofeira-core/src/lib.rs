//! # autofeira-core: Pure Business Logic for Autofeira
//!
//! The vehicle marketplace backend is mostly glue: API routes over a hosted
//! database, payment gateway calls, delegated auth. The pieces with a real
//! contract live here, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Autofeira Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend forms                               │   │
//! │  │    live CPF / phone masks ──► submit listing / checkout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    API route handlers                           │   │
//! │  │    vehicles, FIPE, transactions, checkout (card / PIX)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ autofeira-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐     │   │
//! │  │   │   cpf    │  │  phone   │  │  money   │  │ validation │     │   │
//! │  │   │ checksum │  │  masks   │  │ R$ 1,00  │  │  fields    │     │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘     │   │
//! │  │          digits + mask (shared mechanism)                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cpf`] - CPF checksum validation, masking, the [`Cpf`] type
//! - [`phone`] - Phone masking and length checks, the [`Phone`] type
//! - [`money`] - [`Money`] in centavos with `R$ 1.234,56` display and parsing
//! - [`validation`] - Request-body field validators
//! - [`digits`] / [`mask`] - Digit extraction and progressive masks
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Total functions**: `format`, `validate` and `clean` accept any string and never panic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: prices are centavos (i64), never floats
//! 4. **Explicit Errors**: typed constructors return [`ValidationError`], never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use autofeira_core::{cpf, phone, Money};
//!
//! assert_eq!(cpf::format("11144477735"), "111.444.777-35");
//! assert!(cpf::validate("111.444.777-35"));
//!
//! assert_eq!(phone::format("11987654321"), "(11) 98765-4321");
//! assert!(!phone::validate("119999"));
//!
//! assert_eq!(Money::from_centavos(4_599_000).to_string(), "R$ 45.990,00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cpf;
pub mod digits;
pub mod error;
pub mod mask;
pub mod money;
pub mod phone;
#[cfg(feature = "sqlx")]
mod sql;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cpf::Cpf;
pub use digits::{extract_digits, RawDigits};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use phone::Phone;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Digits in a CPF (9 base digits + 2 check digits).
pub const CPF_LEN: usize = 11;

/// Digits in a landline number including the DDD area code.
pub const PHONE_LANDLINE_LEN: usize = 10;

/// Digits in a mobile number including the DDD area code.
pub const PHONE_MOBILE_LEN: usize = 11;

/// Highest price accepted by [`validation::validate_price_field`]:
/// R$ 100.000.000,00.
///
/// ## Business Reason
/// Catches prices typed with the decimal comma missing or repeated zeros.
pub const MAX_PRICE_CENTAVOS: i64 = 10_000_000_000;
