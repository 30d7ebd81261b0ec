//! # CPF Module
//!
//! Validation and formatting of the CPF (Cadastro de Pessoas Físicas), the
//! 11-digit Brazilian individual taxpayer number. Buyers and sellers enter
//! it on the checkout and listing forms.
//!
//! ## Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   1 1 1 . 4 4 4 . 7 7 7 - 3 5                                           │
//! │   └────────── base ───────┘   │ └── 2nd check digit (weights 11..2)    │
//! │                               └──── 1st check digit (weights 10..2)    │
//! │                                                                         │
//! │   check = r < 2 ? 0 : 11 - r      where r = Σ(digit × weight) mod 11   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two APIs
//! - [`format`], [`validate`], [`clean`]: total functions over any string.
//!   They never fail; `validate` answers with a `bool`.
//! - [`Cpf`]: a value that can only be built from a valid CPF, with a typed
//!   [`ValidationError`] explaining rejections.
//!
//! ## Usage
//! ```rust
//! use autofeira_core::cpf::{self, Cpf};
//!
//! assert_eq!(cpf::format("11144477735"), "111.444.777-35");
//! assert!(cpf::validate("111.444.777-35"));
//! assert!(!cpf::validate("111.444.777-36"));
//!
//! let parsed: Cpf = "111.444.777-35".parse().unwrap();
//! assert_eq!(parsed.as_str(), "11144477735");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::digits::RawDigits;
use crate::error::{ValidationError, ValidationResult};
use crate::mask::Mask;
use crate::CPF_LEN;

pub use crate::digits::extract_digits;

/// Display mask: `DDD.DDD.DDD-DD`.
pub const CPF_MASK: Mask = Mask::new("###.###.###-##");

/// Number of base digits before the two check digits.
const BASE_LEN: usize = 9;

/// Field name used in errors from [`Cpf::parse`].
const FIELD: &str = "cpf";

// =============================================================================
// Free Functions
// =============================================================================

/// Formats any input as `DDD.DDD.DDD-DD`, progressively.
///
/// Partial input yields a partial mask; digits beyond 11 are dropped.
///
/// ## Example
/// ```rust
/// use autofeira_core::cpf;
///
/// assert_eq!(cpf::format("11144477735"), "111.444.777-35");
/// assert_eq!(cpf::format("1114"), "111.4");
/// assert_eq!(cpf::format(""), "");
/// ```
pub fn format(input: &str) -> String {
    CPF_MASK.apply(&extract_digits(input))
}

/// Returns true when the digits of `input` form a valid CPF.
///
/// ## Rules
/// - Exactly 11 digits after discarding everything else
/// - Not a repeated single digit ("000.000.000-00" ... "999.999.999-99")
/// - Both check digits match
///
/// ## Example
/// ```rust
/// use autofeira_core::cpf;
///
/// assert!(cpf::validate("111.444.777-35"));
/// assert!(cpf::validate(" 111 444 777 35 "));
/// assert!(!cpf::validate("111.111.111-11"));
/// assert!(!cpf::validate("not a cpf"));
/// ```
pub fn validate(input: &str) -> bool {
    check(&extract_digits(input)).is_ok()
}

/// Returns the digit-only form of `input`, as stored in the database.
///
/// ## Example
/// ```rust
/// use autofeira_core::cpf;
///
/// assert_eq!(cpf::clean("111.444.777-35"), "11144477735");
/// ```
pub fn clean(input: &str) -> String {
    extract_digits(input).into_string()
}

/// Computes the mod-11 check digit for `digits`.
///
/// Weights run from `digits.len() + 1` down to 2, so a 9-digit base gives
/// the first check digit and the base plus that digit gives the second.
///
/// ## Example
/// ```rust
/// use autofeira_core::cpf::check_digit;
///
/// assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), 3);
/// assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7, 3]), 5);
/// ```
pub fn check_digit(digits: &[u8]) -> u8 {
    // Reduced mod 11 per term so arbitrary slices cannot overflow
    let top = digits.len() as u64 + 1;
    let remainder = digits.iter().enumerate().fold(0u64, |acc, (i, &d)| {
        let weight = (top - i as u64) % 11;
        (acc + u64::from(d) % 11 * weight) % 11
    });

    match remainder {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Runs every CPF rule over already-extracted digits.
fn check(digits: &RawDigits) -> ValidationResult<()> {
    if digits.len() != CPF_LEN {
        return Err(ValidationError::InvalidLength {
            field: FIELD.to_string(),
            expected: CPF_LEN.to_string(),
            actual: digits.len(),
        });
    }

    if digits.is_repeated() {
        return Err(ValidationError::RepeatedDigits {
            field: FIELD.to_string(),
        });
    }

    let mut d = [0u8; CPF_LEN];
    for (slot, value) in d.iter_mut().zip(digits.values()) {
        *slot = value;
    }

    if check_digit(&d[..BASE_LEN]) != d[BASE_LEN] {
        return Err(ValidationError::CheckDigitMismatch {
            field: FIELD.to_string(),
            position: 1,
        });
    }

    if check_digit(&d[..BASE_LEN + 1]) != d[BASE_LEN + 1] {
        return Err(ValidationError::CheckDigitMismatch {
            field: FIELD.to_string(),
            position: 2,
        });
    }

    Ok(())
}

// =============================================================================
// Cpf Type
// =============================================================================

/// A CPF that passed validation, held as its 11 canonical digits.
///
/// ## Serialization
/// - Serializes as the digit-only string (`"11144477735"`)
/// - Deserializes from any punctuation (`"111.444.777-35"`) and rejects
///   invalid CPFs, so a request body with a bad CPF fails at the boundary
/// - `Display` renders the masked form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Encode))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(try_from = "String", into = "String")]
#[ts(export)]
pub struct Cpf(String);

impl Cpf {
    /// Parses a CPF from user input, accepting any punctuation.
    ///
    /// ## Errors
    /// - [`ValidationError::InvalidLength`]: not exactly 11 digits
    /// - [`ValidationError::RepeatedDigits`]: e.g. "000.000.000-00"
    /// - [`ValidationError::CheckDigitMismatch`]: `position` 1 or 2
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::cpf::Cpf;
    /// use autofeira_core::ValidationError;
    ///
    /// assert!(Cpf::parse("111.444.777-35").is_ok());
    /// assert!(matches!(
    ///     Cpf::parse("111.444.777-36"),
    ///     Err(ValidationError::CheckDigitMismatch { position: 2, .. })
    /// ));
    /// ```
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let digits = extract_digits(input);
        check(&digits)?;
        Ok(Cpf(digits.into_string()))
    }

    /// Completes a 9-digit base with its two check digits.
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::cpf::Cpf;
    ///
    /// let cpf = Cpf::from_base([1, 1, 1, 4, 4, 4, 7, 7, 7]).unwrap();
    /// assert_eq!(cpf.to_string(), "111.444.777-35");
    /// ```
    pub fn from_base(base: [u8; BASE_LEN]) -> ValidationResult<Self> {
        if base.iter().any(|&d| d > 9) {
            return Err(ValidationError::InvalidFormat {
                field: FIELD.to_string(),
                reason: "base digits must be between 0 and 9".to_string(),
            });
        }

        let mut digits = base.to_vec();
        digits.push(check_digit(&digits));
        digits.push(check_digit(&digits));

        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        Cpf::parse(&text)
    }

    /// Returns the 11 canonical digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the masked form, `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    /// Returns the 9-digit base, without check digits.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cpf::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::parse(&value)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Cpf::parse(value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl AsRef<str> for Cpf {
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
    fn test_known_valid() {
        assert!(validate("111.444.777-35"));
        assert!(validate("11144477735"));
        assert!(validate("529.982.247-25"));
    }

    #[test]
    fn test_known_invalid() {
        // Corrupted second check digit
        assert!(!validate("111.444.777-36"));
        // Corrupted first check digit
        assert!(!validate("111.444.777-45"));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!validate(""));
        assert!(!validate("1114447773"));
        assert!(!validate("111444777350"));
        assert!(!validate("no digits here"));
    }

    #[test]
    fn test_repeated_digits_are_invalid() {
        for d in 0..=9u8 {
            let repeated = char::from(b'0' + d).to_string().repeat(CPF_LEN);
            assert!(!validate(&repeated), "{repeated} should be rejected");
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format("11144477735"), "111.444.777-35");
        assert_eq!(format("111.444.777-35"), "111.444.777-35");
        assert_eq!(format("111444"), "111.444");
        assert_eq!(format("1114447"), "111.444.7");
        assert_eq!(format("111444777351234"), "111.444.777-35");
        assert_eq!(format("abc"), "");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("111.444.777-35"), "11144477735");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_check_digit_zero_when_remainder_below_two() {
        // sum 0 → remainder 0
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
        // 1*2 = 2 → 11 - 2 = 9
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), 9);
        // 6*2 = 12, 12 mod 11 = 1 → 0
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 6]), 0);
    }

    #[test]
    fn test_check_digit_long_input_does_not_overflow() {
        let digit = check_digit(&vec![255u8; 7000]);
        assert!(digit <= 9);

        let digit = check_digit(&vec![9u8; 1_000_000]);
        assert!(digit <= 9);
    }

    #[test]
    fn test_parse_reports_reason() {
        assert_eq!(
            Cpf::parse("123"),
            Err(ValidationError::InvalidLength {
                field: "cpf".to_string(),
                expected: "11".to_string(),
                actual: 3,
            })
        );
        assert!(matches!(
            Cpf::parse("222.222.222-22"),
            Err(ValidationError::RepeatedDigits { .. })
        ));
        assert!(matches!(
            Cpf::parse("111.444.777-45"),
            Err(ValidationError::CheckDigitMismatch { position: 1, .. })
        ));
        assert!(matches!(
            Cpf::parse("111.444.777-36"),
            Err(ValidationError::CheckDigitMismatch { position: 2, .. })
        ));
    }

    #[test]
    fn test_cpf_accessors() {
        let cpf = Cpf::parse(" 111.444.777-35 ").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.base(), "111444777");
        assert_eq!(cpf.to_string(), "111.444.777-35");
        assert_eq!(String::from(cpf), "11144477735");
    }

    #[test]
    fn test_from_base() {
        let cpf = Cpf::from_base([5, 2, 9, 9, 8, 2, 2, 4, 7]).unwrap();
        assert_eq!(cpf.as_str(), "52998224725");

        assert!(matches!(
            Cpf::from_base([1; 9]),
            Err(ValidationError::RepeatedDigits { .. })
        ));
        assert!(matches!(
            Cpf::from_base([1, 2, 3, 4, 5, 6, 7, 8, 10]),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip_uses_canonical_digits() {
        let cpf: Cpf = serde_json::from_str("\"111.444.777-35\"").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"11144477735\"");

        let bad: Result<Cpf, _> = serde_json::from_str("\"111.444.777-36\"");
        assert!(bad.is_err());
    }

    fn arb_base() -> impl Strategy<Value = [u8; 9]> {
        prop::array::uniform9(0u8..10).prop_filter("repeated base", |b| {
            b.iter().any(|&d| d != b[0])
        })
    }

    proptest! {
        #[test]
        fn test_completed_base_validates(base in arb_base()) {
            let cpf = Cpf::from_base(base).unwrap();
            prop_assert!(validate(cpf.as_str()));
            prop_assert!(validate(&cpf.formatted()));
        }

        #[test]
        fn test_altered_check_digit_is_rejected(base in arb_base(), shift in 1u8..10, second in any::<bool>()) {
            let cpf = Cpf::from_base(base).unwrap();
            let mut bytes = cpf.as_str().as_bytes().to_vec();
            let idx = if second { 10 } else { 9 };
            bytes[idx] = b'0' + (bytes[idx] - b'0' + shift) % 10;
            let altered = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate(&altered));
        }

        #[test]
        fn test_validate_agrees_with_parse(s in "[0-9]{3}\\.?[0-9]{3}\\.?[0-9]{3}-?[0-9]{1,3}") {
            prop_assert_eq!(validate(&s), Cpf::parse(&s).is_ok());
        }

        #[test]
        fn test_wrong_digit_count_never_validates(s in "[0-9]{0,10}|[0-9]{12,20}") {
            prop_assert!(!validate(&s));
        }

        #[test]
        fn test_format_idempotent_on_canonical_form(s in "[0-9]{0,11}") {
            prop_assert_eq!(clean(&format(&clean(&s))), clean(&s));
        }

        #[test]
        fn test_never_panics(s in "\\PC*") {
            let _ = validate(&s);
            let _ = format(&s);
            let _ = Cpf::parse(&s);
        }
    }
}
