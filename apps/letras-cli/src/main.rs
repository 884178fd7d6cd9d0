//! # letras
//!
//! Spells monetary amounts as Spanish contract text, or reads such text back.
//!
//! ## Usage
//! ```text
//! $ letras 120000.50 1
//! CIENTO VEINTE MIL PESOS CON 50/100 PESOS
//! UN PESO
//!
//! $ echo "UN MILLON QUINIENTOS MIL PESOS" | letras --reverse
//! $1500000.00
//! ```
//!
//! ## Exit Status
//! - `0` every input converted
//! - `1` at least one input could not be converted
//! - `2` configuration or I/O failure

mod config;
mod convert;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use letras_core::ThousandStyle;

use crate::config::{LetrasConfig, OutputFormat};
use crate::convert::{process, Mode};

#[derive(Debug, Parser)]
#[command(name = "letras", version)]
#[command(about = "Spell monetary amounts as Spanish words for contracts")]
struct Cli {
    /// Amounts to spell (or spelled amounts with --reverse); reads stdin lines when omitted
    inputs: Vec<String>,

    /// Config file (default: platform config dir, letras.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Currency noun for exactly one unit, e.g. PESO
    #[arg(long)]
    currency_singular: Option<String>,

    /// Currency noun for every other amount, e.g. PESOS
    #[arg(long)]
    currency_plural: Option<String>,

    /// How to write one thousand: mil | un-mil
    #[arg(long)]
    thousand_style: Option<ThousandStyle>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Parse spelled amounts back into figures
    #[arg(long)]
    reverse: bool,
}

impl Cli {
    /// Applies command-line flags on top of file and environment settings.
    fn apply_to(&self, config: &mut LetrasConfig) {
        if let Some(ref singular) = self.currency_singular {
            config.currency.singular = singular.clone();
        }
        if let Some(ref plural) = self.currency_plural {
            config.currency.plural = plural.clone();
        }
        if let Some(style) = self.thousand_style {
            config.thousand_style = style;
        }
        if let Some(format) = self.format {
            config.output = format;
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %fatal_message(&e), "letras failed");
            ExitCode::from(2)
        }
    }
}

/// Renders the whole context chain on one line, e.g.
/// `loading configuration: Config file not found: a.toml`.
fn fatal_message(e: &anyhow::Error) -> String {
    format!("{:#}", e)
}

/// Returns whether every input converted.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    let mut config = LetrasConfig::load(cli.config.clone()).context("loading configuration")?;
    cli.apply_to(&mut config);
    config.validate()?;
    let speller = config.speller()?;

    info!(
        currency = %config.currency.plural,
        thousand_style = %config.thousand_style,
        output = ?config.output,
        "Configuration loaded"
    );

    let mode = if cli.reverse { Mode::Reverse } else { Mode::Spell };
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut errors = stderr.lock();

    let result = if cli.inputs.is_empty() {
        let stdin = io::stdin();
        let lines = stdin.lock().split(b'\n');
        process(lines, &speller, config.output, mode, &mut out, &mut errors)
    } else {
        let inputs = cli.inputs.into_iter().map(|input| Ok(input.into_bytes()));
        process(inputs, &speller, config.output, mode, &mut out, &mut errors)
    };
    let summary = result.context("processing input")?;

    info!(converted = summary.converted, failed = summary.failed, "Done");
    Ok(summary.failed == 0)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every converted line
/// - `RUST_LOG=letras_cli=info` - Show config and summary
/// - Default: WARN level, logs go to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use letras_core::Currency;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "letras",
            "--thousand-style",
            "un-mil",
            "--format",
            "json",
            "--currency-singular",
            "DOLAR",
            "--currency-plural",
            "DOLARES",
            "1000",
        ])
        .unwrap();

        assert_eq!(cli.inputs, vec!["1000".to_string()]);
        assert_eq!(cli.thousand_style, Some(ThousandStyle::UnMil));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(!cli.reverse);
    }

    #[test]
    fn test_cli_rejects_unknown_thousand_style() {
        assert!(Cli::try_parse_from(["letras", "--thousand-style", "thousand"]).is_err());
    }

    #[test]
    fn test_fatal_message_carries_context_chain() {
        let e = anyhow::Error::new(crate::config::ConfigError::NotFound(PathBuf::from("a.toml")))
            .context("loading configuration");
        assert_eq!(
            fatal_message(&e),
            "loading configuration: Config file not found: a.toml"
        );
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["letras", "--currency-plural", "DOLARES", "--reverse"]).unwrap();
        let mut config = LetrasConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.currency, Currency::new("PESO", "DOLARES"));
        assert_eq!(config.thousand_style, ThousandStyle::Mil);
        assert!(cli.reverse);
    }
}
