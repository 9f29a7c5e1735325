//! Input classification.
//!
//! Decides what kind of value the user typed so it can be routed to the
//! matching calculator.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::roman::is_roman_letters;

lazy_static! {
    /// Matches strings containing only characters the evaluator understands.
    static ref EXPRESSION_CHARS: Regex = Regex::new(
        r"^[0-9\s\.\+\-−\*×xX/÷]+$"
    ).unwrap();

    static ref INTEGER: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// What a piece of input looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Empty,
    /// Digits only.
    Integer,
    /// Roman numeral letters only (not necessarily canonical).
    Roman,
    /// Arithmetic with at least one binary operator.
    Expression,
    Unknown,
}

/// Classify trimmed `input`.
pub fn detect_input(input: &str) -> InputKind {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        InputKind::Empty
    } else if INTEGER.is_match(trimmed) {
        InputKind::Integer
    } else if is_roman_letters(trimmed) {
        InputKind::Roman
    } else if looks_like_expression(trimmed) {
        InputKind::Expression
    } else {
        InputKind::Unknown
    }
}

/// Check if input looks like a left-to-right calculator expression.
///
/// Returns `true` if the input:
/// 1. Contains only digits, dots, whitespace and operators
/// 2. Is not just a plain number
/// 3. Has at least one binary operator
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.len() < 2 {
        return false;
    }

    if !EXPRESSION_CHARS.is_match(trimmed) {
        return false;
    }

    if is_plain_number(trimmed) {
        return false;
    }

    has_operator(trimmed)
}

/// Check if the input is just a plain number (no operations).
fn is_plain_number(input: &str) -> bool {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    // Allow optional leading minus for negative numbers
    let to_check = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    !to_check.is_empty() && to_check.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Check if input contains a binary operator.
fn has_operator(input: &str) -> bool {
    if input.contains(['+', '*', '×', 'x', 'X', '/', '÷', '−']) {
        return true;
    }

    // A minus is binary when something other than an operator precedes it
    let chars: Vec<char> = input.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' && i > 0 {
            let prev_non_space = chars[..i].iter().rev().find(|&&ch| !ch.is_whitespace());

            if prev_non_space.is_some_and(|&prev| prev.is_ascii_digit() || prev == '.') {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_rejected() {
        assert!(!looks_like_expression("123"));
        assert!(!looks_like_expression("42.5"));
        assert!(!looks_like_expression("-123"));
        assert!(!looks_like_expression("  42  "));
    }

    #[test]
    fn test_expressions_accepted() {
        assert!(looks_like_expression("2+2"));
        assert!(looks_like_expression("2 + 2"));
        assert!(looks_like_expression("10 * 5"));
        assert!(looks_like_expression("100 / 4"));
        assert!(looks_like_expression("10 - 5"));
        assert!(looks_like_expression("-3 - -2"));
        assert!(looks_like_expression("6 × 7"));
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(!looks_like_expression(""));
        assert!(!looks_like_expression("a"));
        assert!(!looks_like_expression("hello world"));
        assert!(!looks_like_expression("(2 + 3)"));
        assert!(!looks_like_expression("2 ^ 8"));
    }

    #[test]
    fn test_detect_input() {
        assert_eq!(detect_input("   "), InputKind::Empty);
        assert_eq!(detect_input(" 1994 "), InputKind::Integer);
        assert_eq!(detect_input("mcmxciv"), InputKind::Roman);
        assert_eq!(detect_input("IIII"), InputKind::Roman);
        assert_eq!(detect_input("2 x 3"), InputKind::Expression);
        assert_eq!(detect_input("-4.5"), InputKind::Unknown);
        assert_eq!(detect_input("firefox"), InputKind::Unknown);
    }
}
