//! # Validation Module
//!
//! Boundary checks for everything that can reach the speller.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (document generator, CLI)                             │
//! │  └── Parses user text into f64 / Money                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── NaN / ±∞        → NotFinite                                       │
//! │  ├── below zero      → MustBeNonNegative                               │
//! │  └── above the scale → OutOfRange                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: words / speller                                              │
//! │  └── Only ever sees 0 ..= 999 999 999 999.99                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use letras_core::validation::validate_amount;
//!
//! assert!(validate_amount(120000.5).is_ok());
//! assert!(validate_amount(f64::NAN).is_err());
//! assert!(validate_amount(-0.01).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Currency;
use crate::{MAX_AMOUNT_CENTS, MAX_AMOUNT_PESOS, MAX_CURRENCY_NOUN_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a floating-point amount before it is converted to cents.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must not be negative (`-0.0` is treated as zero)
/// - Whole part must not exceed [`MAX_AMOUNT_PESOS`]
///
/// Returns the amount unchanged on success.
pub fn validate_amount(amount: f64) -> ValidationResult<f64> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "amount".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
    }

    if amount.trunc() > MAX_AMOUNT_PESOS as f64 {
        return Err(amount_out_of_range());
    }

    // -0.0 compares equal to 0.0 but would print as "-0"
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

/// Validates an amount already held as integer cents.
///
/// ## Example
/// ```rust
/// use letras_core::Money;
/// use letras_core::validation::validate_money;
///
/// assert!(validate_money(Money::from_cents(12_000_050)).is_ok());
/// assert!(validate_money(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_money(money: Money) -> ValidationResult<Money> {
    if money.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
    }

    if money.cents() > MAX_AMOUNT_CENTS {
        return Err(amount_out_of_range());
    }

    Ok(money)
}

fn amount_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: 0,
        max: MAX_AMOUNT_PESOS as i64,
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates currency nouns.
///
/// ## Rules
/// - Neither noun may be empty or whitespace-only
/// - No leading or trailing whitespace (it would leak into the text)
/// - No lowercase letters; contract text is all caps
/// - Each noun is at most [`MAX_CURRENCY_NOUN_LEN`] characters
pub fn validate_currency(currency: &Currency) -> ValidationResult<()> {
    validate_noun("currency singular", &currency.singular)?;
    validate_noun("currency plural", &currency.plural)
}

fn validate_noun(field: &str, noun: &str) -> ValidationResult<()> {
    if noun.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if noun.trim() != noun {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "leading or trailing whitespace".to_string(),
        });
    }

    if noun.chars().any(char::is_lowercase) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be uppercase".to_string(),
        });
    }

    if noun.chars().count() > MAX_CURRENCY_NOUN_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_CURRENCY_NOUN_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(1.0).is_ok());
        assert!(validate_amount(120000.5).is_ok());
        assert!(validate_amount(999_999_999_999.99).is_ok());

        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(1_000_000_000_000.0).is_err());
    }

    #[test]
    fn test_validate_amount_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_amount(value),
                Err(ValidationError::NotFinite { .. })
            ));
        }
    }

    #[test]
    fn test_validate_amount_negative_zero() {
        let value = validate_amount(-0.0).unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_validate_money() {
        assert!(validate_money(Money::zero()).is_ok());
        assert!(validate_money(Money::from_cents(MAX_AMOUNT_CENTS)).is_ok());

        assert!(matches!(
            validate_money(Money::from_cents(-5)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_money(Money::from_cents(MAX_AMOUNT_CENTS + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_currency() {
        assert!(validate_currency(&Currency::peso()).is_ok());
        assert!(validate_currency(&Currency::new("", "PESOS")).is_err());
        assert!(validate_currency(&Currency::new("PESO", "   ")).is_err());
        assert!(validate_currency(&Currency::new("PESO", "S".repeat(41))).is_err());
        assert!(validate_currency(&Currency::new("DÓLAR", "DÓLARES")).is_ok());
    }

    #[test]
    fn test_validate_currency_rejects_padding_and_lowercase() {
        for currency in [
            Currency::new("PESO", "PESOS "),
            Currency::new(" PESO", "PESOS"),
            Currency::new("peso", "pesos"),
            Currency::new("PESO", "Pesos"),
        ] {
            assert!(matches!(
                validate_currency(&currency),
                Err(ValidationError::InvalidFormat { .. })
            ));
        }
    }
}
