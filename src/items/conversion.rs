//! Roman numeral and currency conversion items.

use serde::Serialize;

use crate::currency::Conversion;
use crate::error::Result;
use crate::roman::{Direction, RomanConversion};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RomanItem {
    pub id: String,
    pub input: String,
    pub display_result: String,
    /// None when the conversion failed.
    pub direction: Option<Direction>,
    pub is_error: bool,
}

impl RomanItem {
    pub fn from_result(input: &str, result: Result<RomanConversion>) -> Self {
        match result {
            Ok(conversion) => Self {
                id: "roman-result".to_string(),
                input: conversion.input,
                display_result: conversion.output,
                direction: Some(conversion.direction),
                is_error: false,
            },
            Err(err) => Self {
                id: "roman-result".to_string(),
                input: input.trim().to_string(),
                display_result: err.to_string(),
                direction: None,
                is_error: true,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrencyItem {
    pub id: String,
    /// `amount FROM -> TO` as requested.
    pub request: String,
    /// Full sentence, e.g. `100 USD = 92.00 EUR`, or the error message.
    pub display_result: String,
    /// Converted amount with two decimals.
    pub clipboard_result: Option<String>,
    pub conversion: Option<Conversion>,
    pub is_error: bool,
}

impl CurrencyItem {
    pub fn from_result(request: String, result: Result<Conversion>) -> Self {
        match result {
            Ok(conversion) => Self {
                id: "currency-result".to_string(),
                request,
                display_result: conversion.summary(),
                clipboard_result: Some(format!("{:.2}", conversion.converted)),
                conversion: Some(conversion),
                is_error: false,
            },
            Err(err) => Self {
                id: "currency-result".to_string(),
                request,
                display_result: err.to_string(),
                clipboard_result: None,
                conversion: None,
                is_error: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Currency, RateTable};
    use crate::roman::convert_roman;

    #[test]
    fn test_roman_item() {
        let item = RomanItem::from_result("mmxxiv", convert_roman("mmxxiv"));
        assert_eq!(item.display_result, "2024");
        assert_eq!(item.direction, Some(Direction::ToDecimal));

        let item = RomanItem::from_result(" 5000 ", convert_roman(" 5000 "));
        assert!(item.is_error);
        assert_eq!(item.input, "5000");
        assert_eq!(item.display_result, "Number must be between 1 and 3999 (got 5000)");
    }

    #[test]
    fn test_currency_item() {
        let table = RateTable::default();
        let item = CurrencyItem::from_result(
            "2 USD -> EUR".to_string(),
            table.convert("2", Currency::Usd, Currency::Eur),
        );
        assert_eq!(item.display_result, "2 USD = 1.84 EUR");
        assert_eq!(item.clipboard_result.as_deref(), Some("1.84"));
    }
}
