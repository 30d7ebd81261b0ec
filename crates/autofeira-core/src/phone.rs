//! # Phone Module
//!
//! Brazilian phone numbers as entered on seller contact forms: a two-digit
//! area code (DDD) followed by an 8-digit landline or a 9-digit mobile
//! number.
//!
//! ```text
//! digits   layout               example
//! ──────   ──────────────────   ────────────────
//! ≤ 10     (DD) DDDD-DDDD       (11) 2222-3333
//! 11       (DD) DDDDD-DDDD      (11) 98765-4321
//! ```
//!
//! Short input is masked progressively with the landline layout, which is
//! what the listing form shows while the seller is still typing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::digits::extract_digits;
use crate::error::{ValidationError, ValidationResult};
use crate::mask::Mask;
use crate::{PHONE_LANDLINE_LEN, PHONE_MOBILE_LEN};

/// Landline mask: `(DD) DDDD-DDDD`.
pub const LANDLINE_MASK: Mask = Mask::new("(##) ####-####");

/// Mobile mask: `(DD) DDDDD-DDDD`.
pub const MOBILE_MASK: Mask = Mask::new("(##) #####-####");

/// Digits in a DDD area code.
const AREA_CODE_LEN: usize = 2;

const FIELD: &str = "phone";

/// Formats any input as a Brazilian phone number.
///
/// ## Example
/// ```rust
/// use autofeira_core::phone;
///
/// assert_eq!(phone::format("11987654321"), "(11) 98765-4321");
/// assert_eq!(phone::format("1122223333"), "(11) 2222-3333");
/// assert_eq!(phone::format("1198"), "(11) 98");
/// ```
pub fn format(input: &str) -> String {
    let digits = extract_digits(input);
    if digits.len() <= PHONE_LANDLINE_LEN {
        LANDLINE_MASK.apply(&digits)
    } else {
        MOBILE_MASK.apply(&digits)
    }
}

/// Returns true when `input` has 10 or 11 digits.
///
/// ## Example
/// ```rust
/// use autofeira_core::phone;
///
/// assert!(phone::validate("(11) 98765-4321"));
/// assert!(!phone::validate("119999"));
/// ```
pub fn validate(input: &str) -> bool {
    is_valid_len(extract_digits(input).len())
}

/// Returns the digit-only form of `input`.
pub fn clean(input: &str) -> String {
    extract_digits(input).into_string()
}

fn is_valid_len(len: usize) -> bool {
    len == PHONE_LANDLINE_LEN || len == PHONE_MOBILE_LEN
}

// =============================================================================
// Phone Type
// =============================================================================

/// A phone number with 10 or 11 canonical digits.
///
/// Serializes as the digit-only string; deserialization accepts any
/// punctuation and rejects wrong lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Encode))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(try_from = "String", into = "String")]
#[ts(export)]
pub struct Phone(String);

impl Phone {
    /// Parses a phone number from user input.
    ///
    /// ## Errors
    /// [`ValidationError::InvalidLength`] unless there are 10 or 11 digits.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let digits = extract_digits(input);
        if !is_valid_len(digits.len()) {
            return Err(ValidationError::InvalidLength {
                field: FIELD.to_string(),
                expected: format!("{PHONE_LANDLINE_LEN} or {PHONE_MOBILE_LEN}"),
                actual: digits.len(),
            });
        }
        Ok(Phone(digits.into_string()))
    }

    /// Returns the canonical digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..AREA_CODE_LEN]
    }

    /// The number without its area code.
    pub fn subscriber(&self) -> &str {
        &self.0[AREA_CODE_LEN..]
    }

    /// True for 11-digit (9-digit subscriber) numbers.
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.0.len() == PHONE_MOBILE_LEN
    }

    /// Returns the masked form.
    pub fn formatted(&self) -> String {
        format(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Phone::parse(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_layouts() {
        assert_eq!(format("11987654321"), "(11) 98765-4321");
        assert_eq!(format("1122223333"), "(11) 2222-3333");
        assert_eq!(format("(11) 2222-3333"), "(11) 2222-3333");
    }

    #[test]
    fn test_format_partial_and_excess() {
        assert_eq!(format(""), "");
        assert_eq!(format("1"), "(1");
        assert_eq!(format("11"), "(11");
        assert_eq!(format("112222"), "(11) 2222");
        assert_eq!(format("1122223"), "(11) 2222-3");
        assert_eq!(format("119876543210"), "(11) 98765-4321");
    }

    #[test]
    fn test_validate() {
        assert!(validate("1122223333"));
        assert!(validate("11987654321"));
        assert!(!validate("119999"));
        assert!(!validate(""));
        assert!(!validate("119876543210"));
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("(11) 98765-4321"), "11987654321");
    }

    #[test]
    fn test_phone_parts() {
        let mobile = Phone::parse("(21) 99876-5432").unwrap();
        assert_eq!(mobile.area_code(), "21");
        assert_eq!(mobile.subscriber(), "998765432");
        assert!(mobile.is_mobile());
        assert_eq!(mobile.to_string(), "(21) 99876-5432");

        let landline: Phone = "2133334444".parse().unwrap();
        assert!(!landline.is_mobile());
        assert_eq!(landline.to_string(), "(21) 3333-4444");
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(
            Phone::parse("119999"),
            Err(ValidationError::InvalidLength {
                field: "phone".to_string(),
                expected: "10 or 11".to_string(),
                actual: 6,
            })
        );
    }

    #[test]
    fn test_conversions_match_cpf() {
        let phone = Phone::try_from("(11) 2222-3333").unwrap();
        let as_ref: &str = phone.as_ref();
        assert_eq!(as_ref, "1122223333");
        assert!(Phone::try_from("119999").is_err());

        let mut phones = vec![
            Phone::parse("21998765432").unwrap(),
            Phone::parse("1122223333").unwrap(),
        ];
        phones.sort();
        assert_eq!(phones[0].as_str(), "1122223333");
    }

    #[test]
    fn test_serde() {
        let phone: Phone = serde_json::from_str("\"(11) 98765-4321\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"11987654321\"");
        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
    }

    proptest! {
        #[test]
        fn test_validate_matches_length(s in "[0-9]{0,14}") {
            prop_assert_eq!(validate(&s), s.len() == 10 || s.len() == 11);
        }

        #[test]
        fn test_format_idempotent_on_canonical_form(s in "[0-9]{0,11}") {
            prop_assert_eq!(clean(&format(&clean(&s))), clean(&s));
        }

        #[test]
        fn test_never_panics(s in "\\PC*") {
            let _ = validate(&s);
            let _ = format(&s);
        }
    }
}
