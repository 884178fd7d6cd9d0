//! # Error Types
//!
//! Domain-specific error types for letras-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  letras-core errors (this file)                                        │
//! │  ├── CoreError        - Spelling failures                              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  letras-cli errors (separate crate)                                    │
//! │  └── ConfigError      - Config file / environment problems             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI) → stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts end up in legal text, so a malformed amount is always an error,
//! never a best-effort string.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while spelling an amount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The amount failed boundary validation (negative, NaN, infinite, ...).
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ValidationError),

    /// Currency nouns failed validation (empty, too long).
    #[error("Invalid currency: {0}")]
    InvalidCurrency(ValidationError),

    /// Whole part is beyond the largest spellable number.
    ///
    /// ## When This Occurs
    /// - `integer_to_words` called directly with a `u64` above
    ///   [`MAX_AMOUNT_PESOS`](crate::MAX_AMOUNT_PESOS)
    #[error("Amount {value} exceeds the largest spellable amount ({max})")]
    AmountTooLarge { value: u64, max: u64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any spelling runs, and by the
/// words-to-number parser for text it cannot read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (unreadable decimal, unknown word, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
