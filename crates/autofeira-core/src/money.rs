//! # Money Module
//!
//! Provides the `Money` type for vehicle prices and FIPE reference values,
//! in Brazilian Real.
//!
//! ## Why Integer Centavos?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    R$ 45.990,50  ==  4_599_050 centavos                                 │
//! │    Parsing, comparison and display never touch f64                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Brazilian Notation
//! `.` groups thousands and `,` separates centavos: `R$ 1.234,56`.
//!
//! ## Usage
//! ```rust
//! use autofeira_core::money::Money;
//!
//! let price = Money::parse("R$ 45.990,00").unwrap();
//! assert_eq!(price.centavos(), 4_599_000);
//! assert_eq!(price.to_string(), "R$ 45.990,00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

const FIELD: &str = "price";

/// Currency symbol, as displayed and as accepted on input.
pub const CURRENCY_SYMBOL: &str = "R$";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a real).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values appear for price drops and refunds
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **serde**: serializes as the plain centavo count
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::money::Money;
    ///
    /// let price = Money::from_centavos(1099); // R$ 10,99
    /// assert_eq!(price.centavos(), 1099);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from reais and centavos.
    ///
    /// For negative amounts only `reais` carries the sign:
    /// `from_reais_centavos(-5, 50)` is -R$ 5,50.
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais_centavos(10, 99).centavos(), 1099);
    /// assert_eq!(Money::from_reais_centavos(-5, 50).centavos(), -550);
    /// ```
    #[inline]
    pub const fn from_reais_centavos(reais: i64, centavos: i64) -> Self {
        if reais < 0 {
            Money(reais * 100 - centavos)
        } else {
            Money(reais * 100 + centavos)
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-reais portion (truncated toward zero).
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Parses a price typed by a user.
    ///
    /// ## Accepted Input
    /// ```text
    /// "R$ 45.990,00"   optional symbol, grouped thousands, 2 decimals
    /// "45990"          plain reais
    /// "45.990"         grouped reais
    /// "45990,5"        one decimal → 50 centavos
    /// "-R$ 5,50"       leading minus
    /// ```
    ///
    /// ## Rejected Input
    /// - `"45990.00"`: `.` is a thousands separator, so groups must have 3 digits
    /// - `"1,234"`: at most two decimal places
    /// - empty text, letters, a lone `R$`
    ///
    /// ## Errors
    /// - [`ValidationError::InvalidFormat`] for anything outside the grammar
    /// - [`ValidationError::OutOfRange`] when the amount does not fit in
    ///   an `i64` of centavos (the full range, `i64::MIN` included)
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let text = input.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };
        let text = text
            .strip_prefix(CURRENCY_SYMBOL)
            .map(str::trim_start)
            .unwrap_or(text);

        if text.is_empty() {
            return Err(invalid("no amount given"));
        }

        let (whole, fraction) = match text.split_once(',') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };

        let reais = parse_grouped(whole)?;
        let centavos = match fraction {
            Some(f) => parse_fraction(f)?,
            None => 0,
        };

        let magnitude = reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(centavos))
            .ok_or_else(overflow)?;

        // Negative amounts reach one centavo further than positive ones
        let signed = if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        signed.map(Money).ok_or_else(overflow)
    }
}

/// Parses the reais part: plain digits, or 1-3 digits then `.DDD` groups.
fn parse_grouped(whole: &str) -> ValidationResult<u64> {
    let mut groups = whole.split('.');
    let first = groups.next().unwrap_or_default();
    let grouped = whole.contains('.');

    if first.is_empty() || (grouped && first.len() > 3) {
        return Err(invalid("malformed thousands grouping"));
    }

    let mut value = accumulate(0, first)?;
    for group in groups {
        if group.len() != 3 {
            return Err(invalid("malformed thousands grouping"));
        }
        value = accumulate(value, group)?;
    }
    Ok(value)
}

/// Parses one or two decimal digits into centavos.
fn parse_fraction(fraction: &str) -> ValidationResult<u64> {
    match fraction.len() {
        1 => Ok(accumulate(0, fraction)? * 10),
        2 => accumulate(0, fraction),
        _ => Err(invalid("expected one or two decimal places")),
    }
}

/// Appends the decimal digits of `chunk` to `acc`.
fn accumulate(acc: u64, chunk: &str) -> ValidationResult<u64> {
    chunk.chars().try_fold(acc, |acc, c| {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| invalid("unexpected character"))?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(overflow)
    })
}

fn invalid(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: FIELD.to_string(),
        reason: reason.to_string(),
    }
}

fn overflow() -> ValidationError {
    ValidationError::OutOfRange {
        field: FIELD.to_string(),
        min: i64::MIN,
        max: i64::MAX,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Brazilian display: `R$ 1.234,56`, negatives as `-R$ 5,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let reais = (magnitude / 100).to_string();

        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, c) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(
            f,
            "{}{} {},{:02}",
            sign,
            CURRENCY_SYMBOL,
            grouped,
            magnitude % 100
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (e.g. monthly installments).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
