//! # Words Module
//!
//! Spells whole numbers in uppercase Spanish, one function per group size.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 520 121                                                              │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  millions(1 520 121)                                                   │
//! │    ├── count 1        → "UN MILLON"                                     │
//! │    └── thousands(520 121)                                              │
//! │          ├── count 520 → hundreds(520) + " MIL"                        │
//! │          │                → "QUINIENTOS VEINTE MIL"                     │
//! │          └── hundreds(121)                                             │
//! │                ├── 1 → "CIENTO"                                         │
//! │                └── tens(21) → "VEINTIUN"                                │
//! │                                                                         │
//! │  = "UN MILLON QUINIENTOS VEINTE MIL CIENTO VEINTIUN"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Spelling Rules
//! - The words are always followed by a noun (PESOS, MIL, MILLONES), so one
//!   is written in its short form: "UN", "VEINTIUN", "TREINTA Y UN".
//! - 10-15 are irregular, 16-19 contract to "DIECI-", 21-29 to "VEINTI-".
//! - 100 is "CIEN"; 101-199 use "CIENTO".
//! - No accents: "DIECISEIS", "VEINTITRES", "MILLON".
//!
//! Each helper takes only its own range; callers split larger numbers first.

use crate::error::{CoreError, CoreResult};
use crate::types::ThousandStyle;
use crate::MAX_AMOUNT_PESOS;

const UNITS: [&str; 10] = [
    "", "UN", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];

const IRREGULAR_TEENS: [&str; 6] = ["DIEZ", "ONCE", "DOCE", "TRECE", "CATORCE", "QUINCE"];

const TENS: [&str; 10] = [
    "", "", "VEINTE", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA",
    "NOVENTA",
];

const HUNDREDS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

// =============================================================================
// Group Spellers
// =============================================================================

/// Spells 0-9. Zero is the empty string; one is "UN".
#[inline]
pub fn units(n: u8) -> &'static str {
    debug_assert!(n < 10, "units() takes 0-9, got {}", n);
    UNITS[usize::from(n % 10)]
}

/// Spells 0-99.
///
/// ## Example
/// ```rust
/// use letras_core::words::tens;
///
/// assert_eq!(tens(15), "QUINCE");
/// assert_eq!(tens(16), "DIECISEIS");
/// assert_eq!(tens(21), "VEINTIUN");
/// assert_eq!(tens(35), "TREINTA Y CINCO");
/// ```
pub fn tens(n: u8) -> String {
    debug_assert!(n < 100, "tens() takes 0-99, got {}", n);
    let n = n % 100;
    let (ten, unit) = (usize::from(n / 10), n % 10);

    match (ten, unit) {
        (0, _) => units(unit).to_string(),
        (1, 0..=5) => IRREGULAR_TEENS[usize::from(unit)].to_string(),
        (1, _) => format!("DIECI{}", units(unit)),
        (2, 0) => TENS[2].to_string(),
        (2, _) => format!("VEINTI{}", units(unit)),
        (_, 0) => TENS[ten].to_string(),
        (_, _) => format!("{} Y {}", TENS[ten], units(unit)),
    }
}

/// Spells 0-999.
///
/// ## Example
/// ```rust
/// use letras_core::words::hundreds;
///
/// assert_eq!(hundreds(100), "CIEN");
/// assert_eq!(hundreds(101), "CIENTO UN");
/// assert_eq!(hundreds(515), "QUINIENTOS QUINCE");
/// ```
pub fn hundreds(n: u16) -> String {
    debug_assert!(n < 1000, "hundreds() takes 0-999, got {}", n);
    let n = n % 1000;
    let (hundred, rest) = (usize::from(n / 100), (n % 100) as u8);

    if hundred == 1 && rest == 0 {
        return "CIEN".to_string();
    }

    join(HUNDREDS[hundred], &tens(rest))
}

/// Spells 0-999 999.
///
/// A count of exactly one thousand is written per `style`; larger counts are
/// `hundreds(count) MIL`.
///
/// ## Example
/// ```rust
/// use letras_core::words::thousands;
/// use letras_core::ThousandStyle;
///
/// assert_eq!(thousands(1_000, ThousandStyle::Mil), "MIL");
/// assert_eq!(thousands(1_000, ThousandStyle::UnMil), "UN MIL");
/// assert_eq!(thousands(120_000, ThousandStyle::Mil), "CIENTO VEINTE MIL");
/// ```
pub fn thousands(n: u32, style: ThousandStyle) -> String {
    debug_assert!(n < 1_000_000, "thousands() takes 0-999999, got {}", n);
    let n = n % 1_000_000;
    let (count, rest) = ((n / 1000) as u16, (n % 1000) as u16);

    let head = match (count, style) {
        (0, _) => String::new(),
        (1, ThousandStyle::Mil) => "MIL".to_string(),
        (1, ThousandStyle::UnMil) => "UN MIL".to_string(),
        _ => format!("{} MIL", hundreds(count)),
    };

    join(&head, &hundreds(rest))
}

/// Spells 0-999 999 999 999.
///
/// ## Example
/// ```rust
/// use letras_core::words::millions;
/// use letras_core::ThousandStyle;
///
/// assert_eq!(millions(1_500_000, ThousandStyle::Mil), "UN MILLON QUINIENTOS MIL");
/// assert_eq!(millions(2_000_000, ThousandStyle::Mil), "DOS MILLONES");
/// ```
pub fn millions(n: u64, style: ThousandStyle) -> String {
    debug_assert!(n <= MAX_AMOUNT_PESOS, "millions() takes 0-{}, got {}", MAX_AMOUNT_PESOS, n);
    let n = n % (MAX_AMOUNT_PESOS + 1);
    let (count, rest) = ((n / 1_000_000) as u32, (n % 1_000_000) as u32);

    let head = match count {
        0 => String::new(),
        1 => "UN MILLON".to_string(),
        _ => format!("{} MILLONES", thousands(count, style)),
    };

    join(&head, &thousands(rest, style))
}

/// Spells a whole amount, "CERO" for zero.
///
/// ## Errors
/// [`CoreError::AmountTooLarge`] above [`MAX_AMOUNT_PESOS`].
///
/// ## Example
/// ```rust
/// use letras_core::{integer_to_words, ThousandStyle};
///
/// assert_eq!(integer_to_words(0, ThousandStyle::Mil).unwrap(), "CERO");
/// assert_eq!(integer_to_words(21, ThousandStyle::Mil).unwrap(), "VEINTIUN");
/// assert!(integer_to_words(1_000_000_000_000, ThousandStyle::Mil).is_err());
/// ```
pub fn integer_to_words(n: u64, style: ThousandStyle) -> CoreResult<String> {
    if n > MAX_AMOUNT_PESOS {
        return Err(CoreError::AmountTooLarge {
            value: n,
            max: MAX_AMOUNT_PESOS,
        });
    }

    if n == 0 {
        return Ok("CERO".to_string());
    }

    Ok(millions(n, style))
}

/// Joins two word groups with one space, skipping empty groups.
fn join(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MIL: ThousandStyle = ThousandStyle::Mil;
    const UN_MIL: ThousandStyle = ThousandStyle::UnMil;

    #[test]
    fn test_units() {
        assert_eq!(units(0), "");
        assert_eq!(units(1), "UN");
        assert_eq!(units(9), "NUEVE");
    }

    #[test]
    fn test_tens_irregular_and_contracted() {
        assert_eq!(tens(10), "DIEZ");
        assert_eq!(tens(11), "ONCE");
        assert_eq!(tens(12), "DOCE");
        assert_eq!(tens(13), "TRECE");
        assert_eq!(tens(14), "CATORCE");
        assert_eq!(tens(15), "QUINCE");
        assert_eq!(tens(16), "DIECISEIS");
        assert_eq!(tens(17), "DIECISIETE");
        assert_eq!(tens(18), "DIECIOCHO");
        assert_eq!(tens(19), "DIECINUEVE");
        assert_eq!(tens(20), "VEINTE");
        assert_eq!(tens(21), "VEINTIUN");
        assert_eq!(tens(22), "VEINTIDOS");
        assert_eq!(tens(29), "VEINTINUEVE");
    }

    #[test]
    fn test_tens_regular_composition() {
        assert_eq!(tens(0), "");
        assert_eq!(tens(7), "SIETE");
        assert_eq!(tens(30), "TREINTA");
        assert_eq!(tens(31), "TREINTA Y UN");
        assert_eq!(tens(45), "CUARENTA Y CINCO");
        assert_eq!(tens(50), "CINCUENTA");
        assert_eq!(tens(99), "NOVENTA Y NUEVE");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(hundreds(0), "");
        assert_eq!(hundreds(100), "CIEN");
        assert_eq!(hundreds(101), "CIENTO UN");
        assert_eq!(hundreds(199), "CIENTO NOVENTA Y NUEVE");
        assert_eq!(hundreds(200), "DOSCIENTOS");
        assert_eq!(hundreds(500), "QUINIENTOS");
        assert_eq!(hundreds(700), "SETECIENTOS");
        assert_eq!(hundreds(900), "NOVECIENTOS");
        assert_eq!(hundreds(999), "NOVECIENTOS NOVENTA Y NUEVE");
    }

    #[test]
    fn test_thousands_single_thousand_style() {
        assert_eq!(thousands(1_000, MIL), "MIL");
        assert_eq!(thousands(1_000, UN_MIL), "UN MIL");
        assert_eq!(thousands(1_001, MIL), "MIL UN");
        assert_eq!(thousands(1_100, UN_MIL), "UN MIL CIEN");
    }

    #[test]
    fn test_thousands_counts() {
        assert_eq!(thousands(21_000, MIL), "VEINTIUN MIL");
        assert_eq!(thousands(100_000, MIL), "CIEN MIL");
        assert_eq!(thousands(101_000, MIL), "CIENTO UN MIL");
        assert_eq!(thousands(500_000, MIL), "QUINIENTOS MIL");
        assert_eq!(thousands(999_999, MIL), "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE");
        assert_eq!(thousands(999, MIL), "NOVECIENTOS NOVENTA Y NUEVE");
    }

    #[test]
    fn test_millions() {
        assert_eq!(millions(1_000_000, MIL), "UN MILLON");
        assert_eq!(millions(1_500_000, MIL), "UN MILLON QUINIENTOS MIL");
        assert_eq!(millions(2_000_001, MIL), "DOS MILLONES UN");
        assert_eq!(millions(21_000_000, MIL), "VEINTIUN MILLONES");
        assert_eq!(millions(1_001_000, MIL), "UN MILLON MIL");
        assert_eq!(millions(1_001_000, UN_MIL), "UN MILLON UN MIL");
        assert_eq!(millions(1_000_000_000, MIL), "MIL MILLONES");
        assert_eq!(millions(1_000_000_000, UN_MIL), "UN MIL MILLONES");
    }

    #[test]
    fn test_largest_amount() {
        assert_eq!(
            millions(MAX_AMOUNT_PESOS, MIL),
            "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE MILLONES \
             NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE"
        );
    }

    #[test]
    fn test_integer_to_words() {
        assert_eq!(integer_to_words(0, MIL).unwrap(), "CERO");
        assert_eq!(integer_to_words(1, MIL).unwrap(), "UN");
        assert_eq!(integer_to_words(120_000, MIL).unwrap(), "CIENTO VEINTE MIL");
        assert_eq!(
            integer_to_words(MAX_AMOUNT_PESOS + 1, MIL),
            Err(CoreError::AmountTooLarge {
                value: MAX_AMOUNT_PESOS + 1,
                max: MAX_AMOUNT_PESOS,
            })
        );
    }

    #[test]
    fn test_no_double_spaces() {
        for n in [0u64, 1, 10, 100, 1_000, 1_000_000, 10_010_010, 100_000_100, 999_000_000_001] {
            let words = integer_to_words(n, MIL).unwrap();
            assert!(!words.contains("  "), "double space in {:?}", words);
            assert_eq!(words.trim(), words);
        }
    }
}
