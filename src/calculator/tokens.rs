//! Splits free-form calculator input into a token stream.
//!
//! Produces alternating operand and operator strings for
//! [`evaluate_expression`](super::evaluate_expression). Structure is not
//! checked here; a stream like `["2", "+", "+"]` is returned as-is and
//! rejected by the evaluator.

use crate::error::{CalcError, Result};

const OPERATORS: &[char] = &['+', '-', '−', '*', '×', 'x', 'X', '/', '÷'];

/// Tokenize `input`.
///
/// A `-` directly in front of a number is a sign when an operand is
/// expected (at the start, or right after an operator).
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut expect_operand = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let signed = expect_operand
            && c == '-'
            && chars.get(i + 1).is_some_and(|&n| is_number_char(n));

        if is_number_char(c) || signed {
            let start = i;
            i += 1;
            while i < chars.len() && is_number_char(chars[i]) {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
            expect_operand = false;
        } else if OPERATORS.contains(&c) {
            tokens.push(c.to_string());
            expect_operand = true;
            i += 1;
        } else {
            return Err(CalcError::MalformedExpression(format!(
                "unexpected character '{}'",
                c
            )));
        }
    }

    Ok(tokens)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
