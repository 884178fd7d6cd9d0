//! # letras-core: Spanish Amount Spelling for Legal Documents
//!
//! Contracts and invoices state every amount twice: once in figures and once
//! in words. This crate produces the words.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Where letras fits                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Contract / Invoice / Quote document generators           │   │
//! │  │   "...la cantidad de $120,000.50 (CIENTO VEINTE MIL PESOS ...)" │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ amount                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ letras-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   words   │  │  speller  │  │   parse   │  │   │
//! │  │   │   Money   │  │ hundreds  │  │  Amount-  │  │  words →  │  │   │
//! │  │   │  cents    │  │ millions  │  │  Speller  │  │  number   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents (float input converted once)
//! - [`words`] - Whole-number spelling: units → tens → hundreds → thousands → millions
//! - [`speller`] - Full amount text with currency noun and cents clause
//! - [`parse`] - Words back to numbers (used to verify spelling)
//! - [`types`] - Currency nouns, thousand style, result record
//! - [`validation`] - Input checks at the API boundary
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use letras_core::amount_to_words;
//!
//! assert_eq!(
//!     amount_to_words(120000.5).unwrap(),
//!     "CIENTO VEINTE MIL PESOS CON 50/100 PESOS"
//! );
//! assert_eq!(amount_to_words(1.0).unwrap(), "UN PESO");
//! assert!(amount_to_words(-3.0).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parse;
pub mod speller;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use parse::{words_to_integer, words_to_money};
pub use speller::{amount_to_words, AmountSpeller};
pub use types::*;
pub use words::integer_to_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest whole amount that can be spelled.
///
/// The word scale tops out at "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS
/// NOVENTA Y NUEVE MILLONES ...". Spanish long-scale "BILLON" (10^12) is not
/// used in contract text.
pub const MAX_AMOUNT_PESOS: u64 = 999_999_999_999;

/// Largest amount in cents (`MAX_AMOUNT_PESOS` and 99 cents).
pub const MAX_AMOUNT_CENTS: i64 = MAX_AMOUNT_PESOS as i64 * 100 + 99;

/// Maximum length of a currency noun.
pub const MAX_CURRENCY_NOUN_LEN: usize = 40;
