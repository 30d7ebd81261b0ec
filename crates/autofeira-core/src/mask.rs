//! # Display Masks
//!
//! Fixed-width masks used to render identifiers for humans.
//!
//! ## Progressive Masking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Mask "###.###.###-##"   ('#' = digit slot, anything else = literal)    │
//! │                                                                         │
//! │  digits         output                                                  │
//! │  ───────────    ──────────────                                          │
//! │  "1"            "1"                                                     │
//! │  "1114"         "111.4"          literal only once a digit follows     │
//! │  "111444777"    "111.444.777"    no dangling "-"                       │
//! │  "11144477735"  "111.444.777-35"                                       │
//! │  "1114447773599" "111.444.777-35" extra digits dropped                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same rule serves the live keystroke mask in the listing form and the
//! final display string, so a partially typed value never errors.

use crate::digits::RawDigits;

/// Character marking a digit slot in a mask template.
pub const SLOT: char = '#';

/// A fixed-width display mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    template: &'static str,
}

impl Mask {
    /// Creates a mask from a template where `#` marks a digit slot.
    pub const fn new(template: &'static str) -> Self {
        Mask { template }
    }

    /// Returns the template string.
    #[inline]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Number of digit slots in the template.
    pub fn capacity(&self) -> usize {
        self.template.chars().filter(|&c| c == SLOT).count()
    }

    /// Fills the mask with `digits`, stopping when the digits run out.
    ///
    /// ## Example
    /// ```rust
    /// use autofeira_core::digits::extract_digits;
    /// use autofeira_core::mask::Mask;
    ///
    /// let mask = Mask::new("(##) ####-####");
    /// assert_eq!(mask.apply(&extract_digits("1122223333")), "(11) 2222-3333");
    /// assert_eq!(mask.apply(&extract_digits("112")), "(11) 2");
    /// assert_eq!(mask.apply(&extract_digits("")), "");
    /// ```
    pub fn apply(&self, digits: &RawDigits) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut pending = String::new();
        let mut digits = digits.as_str().chars();

        for c in self.template.chars() {
            if c != SLOT {
                pending.push(c);
                continue;
            }
            match digits.next() {
                Some(d) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(d);
                }
                None => break,
            }
        }

        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
