//! # Database Bindings
//!
//! `sqlx` support for the validated identifier types, behind the `sqlx`
//! feature.
//!
//! ```text
//! Encode:  Cpf("11144477735") ──► TEXT '11144477735'   (derived, transparent)
//! Decode:  TEXT column ──► String ──► Cpf::parse ──► Cpf | error
//! ```
//!
//! Decoding re-runs validation, so a row written by another tool (empty
//! string, masked text, truncated digits) never produces a `Cpf` or `Phone`
//! that breaks their invariants. Masked text decodes to canonical digits.

/// Implements `sqlx::Type` and a validating `sqlx::Decode` for a
/// newtype stored as TEXT.
macro_rules! impl_validated_text {
    ($ty:ty) => {
        impl<DB: sqlx::Database> sqlx::Type<DB> for $ty
        where
            String: sqlx::Type<DB>,
        {
            fn type_info() -> DB::TypeInfo {
                <String as sqlx::Type<DB>>::type_info()
            }

            fn compatible(ty: &DB::TypeInfo) -> bool {
                <String as sqlx::Type<DB>>::compatible(ty)
            }
        }

        impl<'r, DB: sqlx::Database> sqlx::Decode<'r, DB> for $ty
        where
            String: sqlx::Decode<'r, DB>,
        {
            fn decode(
                value: <DB as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let text = <String as sqlx::Decode<'r, DB>>::decode(value)?;
                Ok(<$ty>::parse(&text)?)
            }
        }
    };
}

impl_validated_text!(crate::cpf::Cpf);
impl_validated_text!(crate::phone::Phone);

// =============================================================================
// Unit Tests
// =============================================================================
