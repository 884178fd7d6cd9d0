//! # Line Conversion
//!
//! Converts input lines one at a time and writes results to an output sink.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "120000.50" ──► spell_str ──► "CIENTO VEINTE MIL PESOS CON 50/100..."  │
//! │                                                                         │
//! │  --reverse:                                                             │
//! │  "UN PESO"   ──► words_to_money ──► "$1.00"                              │
//! │                                                                         │
//! │  bad line    ──► warn! + stderr, counted, next line continues           │
//! │  bad UTF-8   ──► same, reported by line number                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use serde_json::json;
use tracing::{debug, warn};

use letras_core::{words_to_money, AmountSpeller};

use crate::config::OutputFormat;

/// Direction of conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Figures to words.
    Spell,
    /// Words to figures.
    Reverse,
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every non-blank line.
///
/// Lines arrive as raw bytes so that one undecodable line fails on its own.
/// Conversion failures are reported on `errors` and counted; only I/O
/// failures abort the run.
pub fn process<I, W, E>(
    lines: I,
    speller: &AmountSpeller,
    format: OutputFormat,
    mode: Mode,
    out: &mut W,
    errors: &mut E,
) -> io::Result<Summary>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = match String::from_utf8(line?) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = index + 1, error = %e, "Input is not valid UTF-8");
                writeln!(errors, "line {}: invalid UTF-8", index + 1)?;
                summary.failed += 1;
                continue;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match convert_line(input, speller, format, mode) {
            Ok(rendered) => {
                debug!(input = %input, "Converted");
                writeln!(out, "{}", rendered)?;
                summary.converted += 1;
            }
            Err(reason) => {
                warn!(input = %input, error = %reason, "Could not convert input");
                writeln!(errors, "{}: {}", input, reason)?;
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn convert_line(
    input: &str,
    speller: &AmountSpeller,
    format: OutputFormat,
    mode: Mode,
) -> Result<String, String> {
    match mode {
        Mode::Spell => {
            let spelled = speller.spell_str(input).map_err(|e| e.to_string())?;
            match format {
                OutputFormat::Text => Ok(spelled.text),
                OutputFormat::Json => serde_json::to_string(&spelled).map_err(|e| e.to_string()),
            }
        }
        Mode::Reverse => {
            let money = words_to_money(input, speller.currency()).map_err(|e| e.to_string())?;
            match format {
                OutputFormat::Text => Ok(money.to_string()),
                OutputFormat::Json => Ok(json!({
                    "text": input,
                    "cents": money.cents(),
                    "amount": money.to_string(),
                })
                .to_string()),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
