//! # Domain Types
//!
//! Types shared by the speller, the parser and the CLI.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Currency     │   │  ThousandStyle  │   │  SpelledAmount  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  singular PESO  │   │  Mil    "MIL"   │   │  integer_words  │       │
//! │  │  plural  PESOS  │   │  UnMil "UN MIL" │   │  currency_noun  │       │
//! │  └─────────────────┘   └─────────────────┘   │  cents / text   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Currency
// =============================================================================

/// Currency nouns used after the integer words and in the cents clause.
///
/// Nouns are used verbatim, so they should already be uppercase to match
/// the rest of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency {
    /// Noun for exactly one whole unit ("UN PESO").
    pub singular: String,
    /// Noun for every other whole amount, and always in the cents clause.
    pub plural: String,
}

impl Currency {
    /// Creates a currency from its singular and plural nouns.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Currency {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Mexican peso, the default for contract text.
    pub fn peso() -> Self {
        Currency::new("PESO", "PESOS")
    }

    /// Picks the noun that agrees with a whole amount.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::Currency;
    ///
    /// let peso = Currency::peso();
    /// assert_eq!(peso.noun_for(1), "PESO");
    /// assert_eq!(peso.noun_for(0), "PESOS");
    /// assert_eq!(peso.noun_for(21), "PESOS");
    /// ```
    pub fn noun_for(&self, whole: u64) -> &str {
        if whole == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::peso()
    }
}

// =============================================================================
// Thousand Style
// =============================================================================

/// How a thousands group with a count of exactly one is written.
///
/// ```text
///   1 000      Mil → "MIL"              UnMil → "UN MIL"
///   1 001 000  Mil → "UN MILLON MIL"    UnMil → "UN MILLON UN MIL"
///  21 000      both → "VEINTIUN MIL"
/// ```
///
/// `UnMil` reproduces the wording of older generated contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ThousandStyle {
    /// "MIL" alone for exactly one thousand.
    Mil,
    /// "UN MIL" for exactly one thousand.
    UnMil,
}

impl Default for ThousandStyle {
    fn default() -> Self {
        ThousandStyle::Mil
    }
}

impl fmt::Display for ThousandStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThousandStyle::Mil => write!(f, "mil"),
            ThousandStyle::UnMil => write!(f, "un-mil"),
        }
    }
}

impl FromStr for ThousandStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mil" => Ok(ThousandStyle::Mil),
            "un-mil" | "un_mil" | "unmil" | "un mil" => Ok(ThousandStyle::UnMil),
            _ => Err(ValidationError::InvalidFormat {
                field: "thousand_style".to_string(),
                reason: format!("expected 'mil' or 'un-mil', got '{}'", s),
            }),
        }
    }
}

// =============================================================================
// Spelled Amount
// =============================================================================

/// The spelled form of one amount, split into its parts.
///
/// `text` is what goes into the document; the other fields let renderers
/// lay the parts out separately (e.g. bold integer words).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpelledAmount {
    /// Whole units as a number.
    pub whole: u64,
    /// Cents, always `0..=99`.
    pub cents: u8,
    /// Whole units in words, e.g. "CIENTO VEINTE MIL".
    pub integer_words: String,
    /// "PESO" or "PESOS".
    pub currency_noun: String,
    /// "CON 50/100 PESOS", absent when cents are zero.
    pub cents_clause: Option<String>,
    /// Full text: words, noun and cents clause joined by single spaces.
    pub text: String,
}

impl fmt::Display for SpelledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
