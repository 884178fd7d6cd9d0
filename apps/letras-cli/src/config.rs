//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in main)             │
//! │     --currency-plural DOLARES                                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     LETRAS_CURRENCY_SINGULAR=DOLAR                                     │
//! │     LETRAS_CURRENCY_PLURAL=DOLARES                                     │
//! │     LETRAS_THOUSAND_STYLE=un-mil                                       │
//! │     LETRAS_OUTPUT_FORMAT=json                                          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, else the platform config dir:                     │
//! │     ~/.config/letras/letras.toml (Linux)                               │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     PESO / PESOS, "MIL", text output                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # letras.toml
//! thousand_style = "un_mil"   # mil | un_mil
//! output = "text"             # text | json
//!
//! [currency]
//! singular = "PESO"
//! plural = "PESOS"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use letras_core::validation::validate_currency;
use letras_core::{AmountSpeller, Currency, ThousandStyle};

// =============================================================================
// Output Format
// =============================================================================

/// How each converted line is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the text, one line per amount.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("expected 'text' or 'json', got '{}'", other)),
        }
    }
}

// =============================================================================
// Letras Config
// =============================================================================

/// Settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LetrasConfig {
    /// Currency nouns.
    pub currency: Currency,

    /// "MIL" or "UN MIL" for one thousand.
    pub thousand_style: ThousandStyle,

    /// Output format.
    pub output: OutputFormat,
}

impl LetrasConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`letras.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_currency(&self.currency).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Builds the speller described by this configuration.
    pub fn speller(&self) -> Result<AmountSpeller, ConfigError> {
        AmountSpeller::new(self.currency.clone(), self.thousand_style)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Applies `LETRAS_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(singular) = lookup("LETRAS_CURRENCY_SINGULAR") {
            debug!(singular = %singular, "Overriding currency singular from environment");
            self.currency.singular = singular;
        }

        if let Some(plural) = lookup("LETRAS_CURRENCY_PLURAL") {
            debug!(plural = %plural, "Overriding currency plural from environment");
            self.currency.plural = plural;
        }

        if let Some(style) = lookup("LETRAS_THOUSAND_STYLE") {
            self.thousand_style = style.parse().map_err(|_| ConfigError::InvalidValue {
                key: "LETRAS_THOUSAND_STYLE".to_string(),
                value: style.clone(),
            })?;
        }

        if let Some(format) = lookup("LETRAS_OUTPUT_FORMAT") {
            self.output = format.parse().map_err(|_| ConfigError::InvalidValue {
                key: "LETRAS_OUTPUT_FORMAT".to_string(),
                value: format.clone(),
            })?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("mx", "letras", "letras")
            .map(|dirs| dirs.config_dir().join("letras.toml"))
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LetrasConfig::default();
        assert_eq!(config.currency, Currency::peso());
        assert_eq!(config.thousand_style, ThousandStyle::Mil);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: LetrasConfig = toml::from_str(
            r#"
            thousand_style = "un_mil"
            output = "json"

            [currency]
            singular = "DOLAR"
            plural = "DOLARES"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, Currency::new("DOLAR", "DOLARES"));
        assert_eq!(config.thousand_style, ThousandStyle::UnMil);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LetrasConfig = toml::from_str("output = \"json\"").unwrap();
        assert_eq!(config.currency, Currency::peso());
        assert_eq!(config.thousand_style, ThousandStyle::Mil);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = LetrasConfig::default();
        config
            .apply_overrides_from(lookup(&[
                ("LETRAS_CURRENCY_SINGULAR", "EURO"),
                ("LETRAS_CURRENCY_PLURAL", "EUROS"),
                ("LETRAS_THOUSAND_STYLE", "un-mil"),
                ("LETRAS_OUTPUT_FORMAT", "JSON"),
            ]))
            .unwrap();

        assert_eq!(config.currency, Currency::new("EURO", "EUROS"));
        assert_eq!(config.thousand_style, ThousandStyle::UnMil);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_env_override_rejects_bad_values() {
        let mut config = LetrasConfig::default();
        let err = config
            .apply_overrides_from(lookup(&[("LETRAS_THOUSAND_STYLE", "thousand")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "LETRAS_THOUSAND_STYLE"));

        let err = config
            .apply_overrides_from(lookup(&[("LETRAS_OUTPUT_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_currency() {
        let config = LetrasConfig {
            currency: Currency::new("", "PESOS"),
            ..LetrasConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(config.speller().is_err());
    }

    #[test]
    fn test_validate_rejects_padded_env_currency() {
        let mut config = LetrasConfig::default();
        config
            .apply_overrides_from(lookup(&[("LETRAS_CURRENCY_PLURAL", "PESOS ")]))
            .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let path = std::env::temp_dir().join("letras-does-not-exist.toml");
        assert!(matches!(
            LetrasConfig::load(Some(path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("letras-config-{}.toml", std::process::id()));
        std::fs::write(&path, "thousand_style = \"un_mil\"\n").unwrap();

        let config = LetrasConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.thousand_style, ThousandStyle::UnMil);
    }

    #[test]
    fn test_speller_from_config() {
        let config = LetrasConfig {
            thousand_style: ThousandStyle::UnMil,
            ..LetrasConfig::default()
        };
        let speller = config.speller().unwrap();
        assert_eq!(speller.spell_decimal(1000.0).unwrap().text, "UN MIL PESOS");
    }
}
