//! Mock currency conversion.
//!
//! Rates come from a static table of units per US dollar; nothing is
//! fetched. Pairs that do not involve USD are converted through it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{CalcError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aud,
    Cad,
    Chf,
    Cny,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Php,
    Usd,
}

impl Currency {
    /// Alphabetical, as listed in the converter's dropdowns.
    pub const ALL: [Currency; 10] = [
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Eur,
        Self::Gbp,
        Self::Inr,
        Self::Jpy,
        Self::Php,
        Self::Usd,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Php => "PHP",
            Self::Usd => "USD",
        }
    }

    /// Built-in units of this currency per US dollar.
    fn default_usd_rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.92,
            Self::Gbp => 0.79,
            Self::Jpy => 149.50,
            Self::Aud => 1.53,
            Self::Cad => 1.35,
            Self::Chf => 0.87,
            Self::Cny => 7.19,
            Self::Inr => 83.12,
            Self::Php => 58.09,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CalcError::UnknownCurrency(code.to_string()))
    }
}

/// Codes are read through [`FromStr`], so `eur` and ` EUR ` both work.
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Units of each currency per US dollar.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    usd_rates: HashMap<Currency, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            usd_rates: Currency::ALL
                .into_iter()
                .map(|c| (c, c.default_usd_rate()))
                .collect(),
        }
    }
}

impl RateTable {
    /// Built-in table with some rates replaced. USD always stays at 1.
    pub fn with_overrides(overrides: &HashMap<Currency, f64>) -> Self {
        let mut table = Self::default();
        for (&currency, &rate) in overrides {
            if currency != Currency::Usd {
                table.usd_rates.insert(currency, rate);
            }
        }
        table
    }

    pub fn usd_rate(&self, currency: Currency) -> f64 {
        self.usd_rates
            .get(&currency)
            .copied()
            .unwrap_or_else(|| currency.default_usd_rate())
    }

    /// Rate that turns one unit of `from` into `to`.
    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        if from == to {
            1.0
        } else if from == Currency::Usd {
            self.usd_rate(to)
        } else if to == Currency::Usd {
            1.0 / self.usd_rate(from)
        } else {
            (1.0 / self.usd_rate(from)) * self.usd_rate(to)
        }
    }

    /// Convert a raw amount string.
    pub fn convert(&self, amount: &str, from: Currency, to: Currency) -> Result<Conversion> {
        let trimmed = amount.trim();
        let value = trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CalcError::InvalidAmount(trimmed.to_string()))?;

        let rate = self.rate(from, to);
        let converted = round2(value * rate);
        if !converted.is_finite() {
            return Err(CalcError::AmountTooLarge(trimmed.to_string()));
        }
        debug!(%from, %to, rate, value, converted, "currency conversion");

        Ok(Conversion {
            amount: trimmed.to_string(),
            from,
            to,
            rate,
            converted,
        })
    }
}

/// Outcome of a currency conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Conversion {
    /// The amount as the user typed it.
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
    /// Rounded to two decimals.
    pub converted: f64,
}

impl Conversion {
    /// e.g. `100 USD = 92.00 EUR`
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {:.2} {}",
            self.amount, self.from, self.converted, self.to
        )
    }
}

/// Above 1e15 an f64 has no fractional digits left, and scaling by 100
/// could overflow.
fn round2(value: f64) -> f64 {
    if value.abs() >= 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}
