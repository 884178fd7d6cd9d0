//! # Money Module
//!
//! Provides the `Money` type that every amount passes through before it is
//! spelled.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Splitting a float into pesos and cents separately:                    │
//! │    floor(1.999999999)        = 1                                        │
//! │    round(1.999999999 × 100)  = 200  → 200 - 100 = "100/100" ❌         │
//! │                                                                         │
//! │  OUR SOLUTION: round ONCE into integer cents                           │
//! │    round(1.999999999 × 100)  = 200 cents                               │
//! │    200 / 100 = 2 pesos, 200 % 100 = 0 cents → "DOS PESOS" ✅            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use letras_core::money::Money;
//!
//! // Exact: from cents or from decimal text
//! let fee = Money::from_cents(12_000_050);
//! let same: Money = "120,000.50".parse().unwrap();
//! assert_eq!(fee, same);
//!
//! // Float input is validated and rounded exactly once
//! let rounded = Money::from_decimal(1.999999999).unwrap();
//! assert_eq!(rounded.pesos(), 2);
//! assert_eq!(rounded.cents_part(), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::validation::{validate_amount, validate_money};
use crate::MAX_AMOUNT_PESOS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values can be represented so that callers
///   get a `MustBeNonNegative` error instead of a wrapped-around number
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole units and cents.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::money::Money;
    ///
    /// let price = Money::from_major_minor(120_000, 50);
    /// assert_eq!(price.cents(), 12_000_050);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Converts a float amount into cents.
    ///
    /// The amount is validated first (finite, non-negative, within range),
    /// then `amount × 100` is rounded half away from zero. Whole units and
    /// cents are both derived from that single rounded value, so a rounding
    /// carry moves into the whole units and cents stay within `0..=99`.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(120000.5).unwrap().cents(), 12_000_050);
    /// assert_eq!(Money::from_decimal(2.5).unwrap().cents(), 250);
    /// assert!(Money::from_decimal(f64::NAN).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> CoreResult<Self> {
        let amount = validate_amount(amount)?;
        let cents = (amount * 100.0).round() as i64;
        // 999999999999.999 passes the whole-part check but rounds up past the scale
        Ok(validate_money(Money(cents))?)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (pesos) portion.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).pesos(), 10);
    /// assert_eq!(Money::from_cents(-550).pesos(), -5);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text without going through `f64`.
///
/// ## Accepted Forms
/// ```text
///   "120000.5"        → 12 000 050 cents
///   "$1,500,000.00"   → comma groups must be exactly three digits
///   "12.345"          → third fraction digit rounds half-up → 12.35
///   ".75"             → 75 cents
/// ```
/// Negative text, stray characters and amounts above the scale are errors.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        if text.starts_with('-') {
            return Err(ValidationError::MustBeNonNegative {
                field: "amount".to_string(),
            });
        }

        let text = text.strip_prefix('+').unwrap_or(text);
        let text = text.strip_prefix('$').unwrap_or(text).trim_start();

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let whole = strip_grouping(whole)?;

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid_amount("no digits"));
        }

        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount("expected digits with an optional '.' fraction"));
        }

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            // Only digits remain, so the sole failure is overflow
            whole.parse().map_err(|_| out_of_range())?
        };

        if whole_value > MAX_AMOUNT_PESOS {
            return Err(out_of_range());
        }

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().map_or(false, |d| d >= 5);

        let cents = whole_value as i64 * 100 + tenths * 10 + hundredths + i64::from(round_up);
        validate_money(Money(cents))
    }
}

/// Removes `,` / `_` digit grouping from the whole part.
///
/// Commas must separate groups of exactly three digits, so "1,5" (a decimal
/// comma) is rejected rather than read as fifteen.
fn strip_grouping(whole: &str) -> Result<String, ValidationError> {
    if whole.contains(',') {
        let mut groups = whole.split(',');
        let first = groups.next().unwrap_or_default();
        let first_ok = (1..=3).contains(&first.len());
        if !first_ok || !groups.all(|g| g.len() == 3) {
            return Err(invalid_amount("thousands separators must group three digits"));
        }
    }

    Ok(whole.chars().filter(|c| *c != ',' && *c != '_').collect())
}

fn invalid_amount(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: reason.to_string(),
    }
}

fn out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: 0,
        max: MAX_AMOUNT_PESOS as i64,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as figures, e.g. "$120000.50".
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::MAX_AMOUNT_CENTS;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.pesos(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(0, 5).cents(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(12_000_050)), "$120000.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_from_decimal_basic() {
        assert_eq!(Money::from_decimal(0.0).unwrap(), Money::zero());
        assert_eq!(Money::from_decimal(1.0).unwrap().cents(), 100);
        assert_eq!(Money::from_decimal(120000.5).unwrap().cents(), 12_000_050);
        assert_eq!(Money::from_decimal(0.07).unwrap().cents(), 7);
    }

    #[test]
    fn test_from_decimal_rounding_carries_into_whole_units() {
        let money = Money::from_decimal(1.999999999).unwrap();
        assert_eq!(money.pesos(), 2);
        assert_eq!(money.cents_part(), 0);

        let money = Money::from_decimal(9.999999).unwrap();
        assert_eq!(money.pesos(), 10);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_from_decimal_rejects_invalid_input() {
        assert!(matches!(
            Money::from_decimal(-1.0),
            Err(CoreError::InvalidAmount(ValidationError::MustBeNonNegative { .. }))
        ));
        assert!(matches!(
            Money::from_decimal(f64::INFINITY),
            Err(CoreError::InvalidAmount(ValidationError::NotFinite { .. }))
        ));
        assert!(matches!(
            Money::from_decimal(1e13),
            Err(CoreError::InvalidAmount(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_from_decimal_tiny_negative_is_rejected() {
        // Rounds to zero cents, but the input itself is negative
        assert!(Money::from_decimal(-0.001).is_err());
    }

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!("120000.5".parse::<Money>().unwrap().cents(), 12_000_050);
        assert_eq!("$1,500,000.00".parse::<Money>().unwrap().cents(), 150_000_000);
        assert_eq!("1_000".parse::<Money>().unwrap().cents(), 100_000);
        assert_eq!(" 42 ".parse::<Money>().unwrap().cents(), 4200);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("7.".parse::<Money>().unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rounds_third_fraction_digit() {
        assert_eq!("12.345".parse::<Money>().unwrap().cents(), 1235);
        assert_eq!("12.344".parse::<Money>().unwrap().cents(), 1234);
        assert_eq!("1.999".parse::<Money>().unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert!(matches!("".parse::<Money>(), Err(ValidationError::Required { .. })));
        assert!(matches!("-3".parse::<Money>(), Err(ValidationError::MustBeNonNegative { .. })));
        assert!(matches!("1,5".parse::<Money>(), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!("12abc".parse::<Money>(), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(".".parse::<Money>(), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!("1.2.3".parse::<Money>(), Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn test_parse_range_limits() {
        assert_eq!(
            "999999999999.99".parse::<Money>().unwrap().cents(),
            MAX_AMOUNT_CENTS
        );
        assert!(matches!(
            "1000000000000".parse::<Money>(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            "999999999999.995".parse::<Money>(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            "99999999999999999999999".parse::<Money>(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
