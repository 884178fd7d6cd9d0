//! # Speller Module
//!
//! Turns a whole amount into the text that goes into a contract.
//!
//! ## Output Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <INTEGER_WORDS> <PESO|PESOS>[ CON <NN>/100 PESOS]                      │
//! │                                                                         │
//! │  0          → "CERO PESOS"                                              │
//! │  1          → "UN PESO"                                                 │
//! │  0.05       → "CERO PESOS CON 05/100 PESOS"                             │
//! │  120000.50  → "CIENTO VEINTE MIL PESOS CON 50/100 PESOS"                │
//! │  1500000    → "UN MILLON QUINIENTOS MIL PESOS"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The noun is singular only when the whole part is exactly one. The cents
//! clause always uses the plural noun and appears only when cents are above
//! zero.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Currency, SpelledAmount, ThousandStyle};
use crate::validation::{validate_currency, validate_money};
use crate::words::integer_to_words;

// =============================================================================
// Amount Speller
// =============================================================================

/// Spells amounts with a fixed currency and thousand style.
///
/// Immutable after construction; one speller can be shared freely between
/// threads.
///
/// ## Example
/// ```rust
/// use letras_core::{AmountSpeller, Currency, Money, ThousandStyle};
///
/// let speller = AmountSpeller::new(Currency::new("DOLAR", "DOLARES"), ThousandStyle::UnMil)?;
/// let spelled = speller.spell(Money::from_major_minor(1_000, 5))?;
/// assert_eq!(spelled.text, "UN MIL DOLARES CON 05/100 DOLARES");
/// # Ok::<(), letras_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmountSpeller {
    currency: Currency,
    thousand_style: ThousandStyle,
}

impl AmountSpeller {
    /// Creates a speller after checking the currency nouns.
    pub fn new(currency: Currency, thousand_style: ThousandStyle) -> CoreResult<Self> {
        validate_currency(&currency).map_err(CoreError::InvalidCurrency)?;
        Ok(AmountSpeller {
            currency,
            thousand_style,
        })
    }

    /// Returns the currency nouns in use.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the thousand style in use.
    pub fn thousand_style(&self) -> ThousandStyle {
        self.thousand_style
    }

    /// Spells an exact amount.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] for negative or above-range money.
    pub fn spell(&self, money: Money) -> CoreResult<SpelledAmount> {
        let money = validate_money(money)?;
        let whole = money.pesos() as u64;
        let cents = money.cents_part() as u8;

        let integer_words = integer_to_words(whole, self.thousand_style)?;
        let currency_noun = self.currency.noun_for(whole).to_string();
        let cents_clause =
            (cents > 0).then(|| format!("CON {:02}/100 {}", cents, self.currency.plural));

        let text = match &cents_clause {
            Some(clause) => format!("{} {} {}", integer_words, currency_noun, clause),
            None => format!("{} {}", integer_words, currency_noun),
        };

        Ok(SpelledAmount {
            whole,
            cents,
            integer_words,
            currency_noun,
            cents_clause,
            text,
        })
    }

    /// Spells a float amount.
    ///
    /// NaN, infinities and negative values are rejected instead of producing
    /// text. See [`Money::from_decimal`] for how cents are rounded.
    pub fn spell_decimal(&self, amount: f64) -> CoreResult<SpelledAmount> {
        self.spell(Money::from_decimal(amount)?)
    }

    /// Spells decimal text such as `"120,000.50"`, without float rounding.
    pub fn spell_str(&self, amount: &str) -> CoreResult<SpelledAmount> {
        self.spell(amount.parse::<Money>()?)
    }
}

/// Spells an amount in pesos with the default style.
///
/// ## Example
/// ```rust
/// use letras_core::amount_to_words;
///
/// assert_eq!(amount_to_words(0.0).unwrap(), "CERO PESOS");
/// assert_eq!(amount_to_words(100.0).unwrap(), "CIEN PESOS");
/// assert_eq!(amount_to_words(21.0).unwrap(), "VEINTIUN PESOS");
/// ```
pub fn amount_to_words(amount: f64) -> CoreResult<String> {
    AmountSpeller::default()
        .spell_decimal(amount)
        .map(|spelled| spelled.text)
}

// =============================================================================
// Unit Tests
// =============================================================================
