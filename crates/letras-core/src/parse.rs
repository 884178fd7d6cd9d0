//! # Parse Module
//!
//! Reads spelled amounts back into numbers.
//!
//! Used to check generated contract text against the figures next to it, and
//! by the round-trip property tests of [`crate::words`].
//!
//! ## Grammar
//! ```text
//! amount   := "CERO" | millions? section?
//! millions := ("UN" "MILLON") | (section "MILLONES")
//! section  := (group? "MIL")? group?          -- "MIL" alone = one thousand
//! group    := hundred? (teen | ten ("Y" unit)? | unit)?
//!
//! hundred  := CIEN | CIENTO | DOSCIENTOS .. NOVECIENTOS
//! teen     := DIEZ .. DIECINUEVE | VEINTE | VEINTIUN .. VEINTINUEVE
//! ten      := TREINTA .. NOVENTA
//! unit     := UN | UNO | DOS .. NUEVE
//! ```
//! Word tables come from [`crate::words`], so the parser accepts exactly the
//! vocabulary the speller emits (plus the long forms "UNO"/"VEINTIUNO").

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Currency;
use crate::validation::ValidationResult;
use crate::words::{hundreds, tens, units};
use crate::MAX_AMOUNT_PESOS;

// =============================================================================
// Vocabulary
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    Cero,
    Unit(u64),
    /// 10-29: never followed by "Y"
    Teen(u64),
    /// 30, 40, .. 90: may be followed by "Y"
    Ten(u64),
    /// "CIEN": closes the group
    Cien,
    Hundred(u64),
    Y,
    Mil,
    Millon,
    Millones,
}

fn classify(token: &str) -> Option<Word> {
    match token {
        "CERO" => return Some(Word::Cero),
        "Y" => return Some(Word::Y),
        "MIL" => return Some(Word::Mil),
        "MILLON" => return Some(Word::Millon),
        "MILLONES" => return Some(Word::Millones),
        "CIEN" => return Some(Word::Cien),
        "UNO" => return Some(Word::Unit(1)),
        "VEINTIUNO" => return Some(Word::Teen(21)),
        _ => {}
    }

    if let Some(n) = (1..=9u8).find(|&n| units(n) == token) {
        return Some(Word::Unit(u64::from(n)));
    }
    if let Some(n) = (10..=29u8).find(|&n| tens(n) == token) {
        return Some(Word::Teen(u64::from(n)));
    }
    if let Some(n) = (3..=9u8).map(|t| t * 10).find(|&n| tens(n) == token) {
        return Some(Word::Ten(u64::from(n)));
    }
    // hundreds(100) is "CIEN"; "CIENTO" only appears with a remainder
    if token == "CIENTO" {
        return Some(Word::Hundred(100));
    }
    (2..=9u16)
        .map(|h| h * 100)
        .find(|&n| hundreds(n) == token)
        .map(|n| Word::Hundred(u64::from(n)))
}

// =============================================================================
// Group State
// =============================================================================

/// What the previous token inside the current group was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Nothing,
    Ciento,
    Hundred,
    Cien,
    Teen,
    Ten,
    Y,
    Unit,
}

/// Accumulates one 0-999 group.
#[derive(Debug)]
struct Group {
    value: u64,
    last: Last,
}

impl Group {
    fn new() -> Self {
        Group {
            value: 0,
            last: Last::Nothing,
        }
    }

    fn push(&mut self, word: Word, token: &str) -> ValidationResult<()> {
        let next = match (word, self.last) {
            (Word::Cien, Last::Nothing) => Last::Cien,
            (Word::Hundred(100), Last::Nothing) => Last::Ciento,
            (Word::Hundred(_), Last::Nothing) => Last::Hundred,
            (Word::Teen(_), Last::Nothing | Last::Ciento | Last::Hundred) => Last::Teen,
            (Word::Ten(_), Last::Nothing | Last::Ciento | Last::Hundred) => Last::Ten,
            (Word::Y, Last::Ten) => Last::Y,
            (Word::Unit(_), Last::Nothing | Last::Ciento | Last::Hundred | Last::Y) => Last::Unit,
            _ => return Err(misplaced(token)),
        };

        self.value += match word {
            Word::Cien => 100,
            Word::Unit(n) | Word::Teen(n) | Word::Ten(n) | Word::Hundred(n) => n,
            _ => 0,
        };
        self.last = next;
        Ok(())
    }

    /// Closes the group before a multiplier or at the end of input.
    fn finish(&mut self, at: &str) -> ValidationResult<u64> {
        match self.last {
            Last::Ciento => return Err(invalid(format!("'CIENTO' needs a remainder before '{}'", at))),
            Last::Y => return Err(invalid(format!("'Y' must be followed by a unit before '{}'", at))),
            _ => {}
        }

        let value = self.value;
        *self = Group::new();
        Ok(value)
    }

    fn is_empty(&self) -> bool {
        self.last == Last::Nothing
    }
}

// =============================================================================
// Integer Parsing
// =============================================================================

/// Parses Spanish number words into a whole number.
///
/// Case and surrounding whitespace are ignored. Both "MIL" and "UN MIL" are
/// accepted for one thousand.
///
/// ## Example
/// ```rust
/// use letras_core::words_to_integer;
///
/// assert_eq!(words_to_integer("CIENTO VEINTE MIL").unwrap(), 120_000);
/// assert_eq!(words_to_integer("un millon quinientos mil").unwrap(), 1_500_000);
/// assert!(words_to_integer("VEINTE Y UN").is_err());
/// ```
pub fn words_to_integer(text: &str) -> ValidationResult<u64> {
    let upper = text.trim().to_uppercase();
    let tokens: Vec<&str> = upper.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(ValidationError::Required {
            field: "words".to_string(),
        });
    }

    if tokens == ["CERO"] {
        return Ok(0);
    }

    let mut millions: Option<u64> = None;
    let mut thousands: Option<u64> = None;
    let mut group = Group::new();

    for token in &tokens {
        let word = classify(token).ok_or_else(|| invalid(format!("unknown word '{}'", token)))?;

        match word {
            Word::Cero => return Err(invalid("'CERO' must stand alone".to_string())),
            Word::Mil => {
                if thousands.is_some() {
                    return Err(misplaced(token));
                }
                let count = if group.is_empty() { 1 } else { group.finish(token)? };
                thousands = Some(count * 1000);
            }
            Word::Millon | Word::Millones => {
                if millions.is_some() {
                    return Err(misplaced(token));
                }
                let count = thousands.take().unwrap_or(0) + group.finish(token)?;
                let agrees = match word {
                    Word::Millon => count == 1,
                    _ => count > 1,
                };
                if !agrees {
                    return Err(invalid(format!("'{}' does not agree with a count of {}", token, count)));
                }
                millions = Some(count * 1_000_000);
            }
            _ => group.push(word, token)?,
        }
    }

    let rest = group.finish("end of text")?;
    let value = millions.unwrap_or(0) + thousands.unwrap_or(0) + rest;

    if value > MAX_AMOUNT_PESOS {
        return Err(ValidationError::OutOfRange {
            field: "words".to_string(),
            min: 0,
            max: MAX_AMOUNT_PESOS as i64,
        });
    }

    Ok(value)
}

// =============================================================================
// Amount Parsing
// =============================================================================

/// Parses a full spelled amount: words, currency noun and optional cents clause.
///
/// ## Example
/// ```rust
/// use letras_core::{words_to_money, Currency, Money};
///
/// let money = words_to_money("CIENTO VEINTE MIL PESOS CON 50/100 PESOS", &Currency::peso()).unwrap();
/// assert_eq!(money, Money::from_major_minor(120_000, 50));
/// ```
pub fn words_to_money(text: &str, currency: &Currency) -> ValidationResult<Money> {
    let upper = text.trim().to_uppercase();
    let singular = currency.singular.trim().to_uppercase();
    let plural = currency.plural.trim().to_uppercase();

    let (main, cents_clause) = match upper.split_once(" CON ") {
        Some((main, clause)) => (main.trim_end(), Some(clause.trim())),
        None => (upper.as_str(), None),
    };

    let (words, noun_is_singular) = if let Some(words) = strip_noun(main, &plural) {
        (words, false)
    } else if let Some(words) = strip_noun(main, &singular) {
        (words, true)
    } else {
        return Err(invalid(format!("expected the amount to end with '{}' or '{}'", singular, plural)));
    };

    let whole = words_to_integer(words)?;
    if noun_is_singular != (whole == 1) {
        return Err(invalid(format!("currency noun does not agree with {}", whole)));
    }

    let cents = match cents_clause {
        Some(clause) => parse_cents_clause(clause, &plural)?,
        None => 0,
    };

    Ok(Money::from_major_minor(whole as i64, cents))
}

/// Strips a trailing currency noun, requiring a space before it.
fn strip_noun<'a>(text: &'a str, noun: &str) -> Option<&'a str> {
    if noun.is_empty() {
        return None;
    }
    let rest = text.strip_suffix(noun)?;
    rest.ends_with(char::is_whitespace).then(|| rest.trim_end())
}

/// Parses "NN/100 PESOS" into 1-99 cents.
fn parse_cents_clause(clause: &str, plural: &str) -> ValidationResult<i64> {
    let fraction = clause
        .strip_suffix(plural)
        .map(str::trim_end)
        .ok_or_else(|| invalid(format!("cents clause must end with '{}'", plural)))?;

    let cents = fraction
        .strip_suffix("/100")
        .filter(|n| (1..=2).contains(&n.len()) && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<i64>().ok())
        .ok_or_else(|| invalid(format!("expected 'NN/100', got '{}'", fraction)))?;

    if !(1..=99).contains(&cents) {
        return Err(invalid(format!("cents must be 01-99, got {}", cents)));
    }

    Ok(cents)
}

fn misplaced(token: &str) -> ValidationError {
    invalid(format!("unexpected '{}'", token))
}

fn invalid(reason: String) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "words".to_string(),
        reason,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
