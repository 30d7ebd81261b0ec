//! # Digit Extraction
//!
//! Every identifier in this crate goes through the same first step: throw
//! away everything that is not an ASCII decimal digit.
//!
//! ```text
//! "111.444.777-35"  ──►  extract_digits  ──►  RawDigits("11144477735")
//! " (11) 98765-4321"──►  extract_digits  ──►  RawDigits("11987654321")
//! ```
//!
//! Only `0`–`9` count. Full-width or Arabic-Indic digits are treated like
//! any other punctuation, so the checksum never sees a digit it cannot weigh.

use std::fmt;

/// The decimal digits of an input string, in their original order.
///
/// Invariant: the inner string contains only ASCII `0`–`9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawDigits(String);

impl RawDigits {
    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits extracted.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the input contained no digits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the numeric value (0-9) of each digit.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// True when there is at least one digit and every digit is the same.
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::digits::extract_digits;
    ///
    /// assert!(extract_digits("111.111.111-11").is_repeated());
    /// assert!(!extract_digits("111.444.777-35").is_repeated());
    /// assert!(!extract_digits("").is_repeated());
    /// ```
    pub fn is_repeated(&self) -> bool {
        let mut bytes = self.0.bytes();
        match bytes.next() {
            Some(first) => bytes.all(|b| b == first),
            None => false,
        }
    }

    /// Consumes the value, returning the digit-only string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Removes every character that is not an ASCII decimal digit.
///
/// Never fails: empty input, or input without digits, yields empty digits.
///
/// ## Example
/// ```rust
/// use autofeira_core::digits::extract_digits;
///
/// assert_eq!(extract_digits("111.444.777-35").as_str(), "11144477735");
/// assert_eq!(extract_digits("R$ 1.500,00").as_str(), "150000");
/// assert!(extract_digits("abc").is_empty());
/// ```
pub fn extract_digits(input: &str) -> RawDigits {
    RawDigits(input.chars().filter(char::is_ascii_digit).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
