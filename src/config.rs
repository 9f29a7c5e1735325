//! Configuration loaded from `config.toml`.
//!
//! Every key is optional. Without a file the built-in defaults apply.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::calculator::{DEFAULT_PRECISION, NumberFormat};
use crate::currency::{Currency, RateTable};

/// Largest accepted `precision`; f64 carries about 15 significant digits.
pub const MAX_PRECISION: usize = 15;

const APP_DIR: &str = "calcdeck";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places kept before trailing zeros are trimmed.
    pub precision: usize,
    pub thousands_separator: bool,
    /// Copy every result to the clipboard.
    pub copy_results: bool,
    pub currency: CurrencyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            thousands_separator: true,
            copy_results: false,
            currency: CurrencyConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyConfig {
    pub from: Currency,
    pub to: Currency,
    /// Currency code to units per USD, replacing the built-in rate.
    pub rates: HashMap<String, f64>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            from: Currency::Usd,
            to: Currency::Php,
            rates: HashMap::new(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/calcdeck/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.precision > MAX_PRECISION {
            bail!(
                "precision must be at most {}, got {}",
                MAX_PRECISION,
                self.precision
            );
        }
        self.rate_overrides()?;
        Ok(())
    }

    fn rate_overrides(&self) -> anyhow::Result<HashMap<Currency, f64>> {
        let mut overrides = HashMap::new();
        for (code, &rate) in &self.currency.rates {
            let currency: Currency = code.parse()?;
            if !(rate.is_finite() && rate > 0.0) {
                bail!("rate for {} must be a positive number, got {}", currency, rate);
            }
            if currency == Currency::Usd && rate != 1.0 {
                warn!(rate, "USD is the base currency, ignoring its rate");
            }
            overrides.insert(currency, rate);
        }
        Ok(overrides)
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.precision,
            thousands_separator: self.thousands_separator,
        }
    }

    /// Built-in exchange rates with the configured overrides applied.
    pub fn rate_table(&self) -> anyhow::Result<RateTable> {
        Ok(RateTable::with_overrides(&self.rate_overrides()?))
    }
}
