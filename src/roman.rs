//! Roman numeral conversion.
//!
//! Encoding walks a fixed, strictly descending symbol table greedily.
//! Decoding only accepts canonical numerals: the input is checked against
//! the standard grammar before any arithmetic happens, so forms such as
//! `IIII` or `VX` are rejected instead of being miscounted.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{CalcError, Result};

/// Smallest value with a Roman representation.
pub const MIN_VALUE: i64 = 1;
/// Largest value with a Roman representation.
pub const MAX_VALUE: i64 = 3999;

/// (value, symbol) pairs, strictly descending. Order matters for encoding.
const SYMBOLS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

lazy_static! {
    /// Canonical numerals in [1, 3999]. Also matches the empty string,
    /// which callers reject separately.
    static ref CANONICAL: Regex = Regex::new(
        r"(?i)^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$"
    ).unwrap();

    /// Text made only of Roman letters, canonical or not.
    static ref ROMAN_LETTERS: Regex = Regex::new(r"(?i)^[IVXLCDM]+$").unwrap();

    static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Which way a conversion went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToRoman,
    ToDecimal,
}

/// Outcome of [`convert_roman`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RomanConversion {
    pub input: String,
    pub output: String,
    pub direction: Direction,
}

/// Encode `n` as a canonical Roman numeral.
pub fn encode_roman(n: i64) -> Result<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        return Err(CalcError::OutOfRange(n.to_string()));
    }

    let mut remaining = n as u32;
    let mut result = String::new();
    for &(value, symbol) in SYMBOLS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }

    Ok(result)
}

/// Decode a canonical Roman numeral (case-insensitive).
pub fn decode_roman(input: &str) -> Result<u32> {
    if input.is_empty() || !CANONICAL.is_match(input) {
        return Err(CalcError::InvalidFormat(input.to_string()));
    }

    let values: Vec<u32> = input
        .chars()
        .map(|c| symbol_value(c).ok_or_else(|| CalcError::InvalidFormat(input.to_string())))
        .collect::<Result<_>>()?;

    let mut total = 0;
    let mut i = 0;
    while i < values.len() {
        let current = values[i];
        match values.get(i + 1) {
            Some(&next) if current < next => {
                total += next - current;
                i += 2;
            }
            _ => {
                total += current;
                i += 1;
            }
        }
    }

    Ok(total)
}

/// Convert free-form widget input in whichever direction it implies.
///
/// Digits are encoded, Roman letters are decoded, anything else is rejected.
pub fn convert_roman(input: &str) -> Result<RomanConversion> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let (output, direction) = if DIGITS.is_match(trimmed) {
        // A digit run too long for i64 is still just a number out of range.
        let n: i64 = trimmed
            .parse()
            .map_err(|_| CalcError::OutOfRange(trimmed.to_string()))?;
        (encode_roman(n)?, Direction::ToRoman)
    } else if ROMAN_LETTERS.is_match(trimmed) {
        (decode_roman(trimmed)?.to_string(), Direction::ToDecimal)
    } else {
        return Err(CalcError::UnrecognizedInput(trimmed.to_string()));
    };

    debug!(input = trimmed, %output, ?direction, "roman conversion");

    Ok(RomanConversion {
        input: trimmed.to_string(),
        output,
        direction,
    })
}

/// Whether `input` consists only of Roman numeral letters.
pub fn is_roman_letters(input: &str) -> bool {
    ROMAN_LETTERS.is_match(input)
}

fn symbol_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode_roman(1).unwrap(), "I");
        assert_eq!(encode_roman(4).unwrap(), "IV");
        assert_eq!(encode_roman(9).unwrap(), "IX");
        assert_eq!(encode_roman(14).unwrap(), "XIV");
        assert_eq!(encode_roman(40).unwrap(), "XL");
        assert_eq!(encode_roman(1994).unwrap(), "MCMXCIV");
        assert_eq!(encode_roman(2024).unwrap(), "MMXXIV");
        assert_eq!(encode_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_encode_out_of_range() {
        for n in [0, -1, 4000, i64::MAX, i64::MIN] {
            assert_eq!(
                encode_roman(n),
                Err(CalcError::OutOfRange(n.to_string()))
            );
        }
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode_roman("MCMXCIV").unwrap(), 1994);
        assert_eq!(decode_roman("MMMCMXCIX").unwrap(), 3999);
        assert_eq!(decode_roman("XLII").unwrap(), 42);
        assert_eq!(decode_roman("iv").unwrap(), 4);
        assert_eq!(decode_roman("mCmXcIv").unwrap(), 1994);
    }

    #[test]
    fn test_decode_rejects_non_canonical() {
        for s in ["IIII", "VX", "IC", "MMMM", "XXXX", "VV", "IL", ""] {
            assert_eq!(
                decode_roman(s),
                Err(CalcError::InvalidFormat(s.to_string())),
                "{s} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert!(matches!(decode_roman("X1"), Err(CalcError::InvalidFormat(_))));
        assert!(matches!(decode_roman(" X"), Err(CalcError::InvalidFormat(_))));
    }

    #[test]
    fn test_round_trip_every_value() {
        for n in MIN_VALUE..=MAX_VALUE {
            let encoded = encode_roman(n).unwrap();
            assert_eq!(decode_roman(&encoded).unwrap() as i64, n);
        }
    }

    #[test]
    fn test_convert_detects_direction() {
        let to_roman = convert_roman(" 1994 ").unwrap();
        assert_eq!(to_roman.output, "MCMXCIV");
        assert_eq!(to_roman.direction, Direction::ToRoman);

        let to_decimal = convert_roman("xiv").unwrap();
        assert_eq!(to_decimal.output, "14");
        assert_eq!(to_decimal.direction, Direction::ToDecimal);
    }

    #[test]
    fn test_convert_errors() {
        assert_eq!(convert_roman("   "), Err(CalcError::EmptyInput));
        assert_eq!(
            convert_roman("12a"),
            Err(CalcError::UnrecognizedInput("12a".to_string()))
        );
        assert_eq!(
            convert_roman("0"),
            Err(CalcError::OutOfRange("0".to_string()))
        );
        assert!(matches!(
            convert_roman("99999999999999999999999"),
            Err(CalcError::OutOfRange(_))
        ));
        assert!(matches!(
            convert_roman("IIII"),
            Err(CalcError::InvalidFormat(_))
        ));
    }
}
