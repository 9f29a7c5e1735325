//! Left-to-right expression evaluation and result formatting.
//!
//! Operators are applied in the order they appear, with no precedence:
//! `2 + 3 * 4` is `(2 + 3) * 4 = 20`.

use serde::Serialize;
use tracing::debug;

use super::tokens::tokenize;
use crate::error::{CalcError, Result};

/// Decimal places used when no configuration says otherwise.
pub const DEFAULT_PRECISION: usize = 8;

/// The four supported binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator token. Accepts ASCII and typographic forms.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" | "x" | "X" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply to `(lhs, rhs)`. Division by zero fails and leaves `lhs` untouched.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// How numeric results are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal places kept before trailing zeros are trimmed.
    pub precision: usize,
    /// Group integer digits with commas in display output.
    pub thousands_separator: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            thousands_separator: true,
        }
    }
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display (with thousand separators when enabled).
        display_result: String,
        /// Formatted for clipboard (raw number).
        clipboard_result: String,
    },
    /// Expression could not be evaluated, or its value is not a finite number.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Reduce `number (operator number)*` strictly left to right.
pub fn evaluate_expression<S: AsRef<str>>(tokens: &[S]) -> Result<f64> {
    let (first, rest) = tokens
        .split_first()
        .ok_or_else(|| CalcError::MalformedExpression("empty expression".to_string()))?;

    let mut acc = parse_operand(first.as_ref())?;

    for pair in rest.chunks(2) {
        let op_token = pair[0].as_ref();
        let op = Operator::parse(op_token).ok_or_else(|| {
            CalcError::MalformedExpression(format!("unknown operator '{}'", op_token))
        })?;
        let operand = match pair.get(1) {
            Some(token) => parse_operand(token.as_ref())?,
            None => {
                return Err(CalcError::MalformedExpression(format!(
                    "trailing operator '{}'",
                    op_token
                )));
            }
        };

        acc = op.apply(acc, operand)?;
        debug!(?op, operand, acc, "reduced");
    }

    Ok(acc)
}

/// Tokenize free-form text, evaluate it, and format the outcome.
pub fn calculate(input: &str, format: &NumberFormat) -> CalcResult {
    let expression = input.trim().to_string();

    let value = match tokenize(&expression).and_then(|tokens| evaluate_expression(&tokens)) {
        Ok(value) => value,
        Err(err) => {
            return CalcResult::Error {
                expression,
                message: err.to_string(),
            };
        }
    };

    if value.is_nan() {
        CalcResult::Error {
            expression,
            message: "Not a Number".to_string(),
        }
    } else if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        CalcResult::Error {
            expression,
            message: msg.to_string(),
        }
    } else {
        CalcResult::Success {
            expression,
            display_result: format_display(value, format),
            clipboard_result: format_plain(value, format.precision),
            value,
        }
    }
}

fn parse_operand(token: &str) -> Result<f64> {
    // f64's parser also takes "inf" and "NaN"; operands must be plain numbers.
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::MalformedExpression(format!(
            "'{}' is not a number",
            token
        ))),
    }
}

/// Format a number without separators: integral values have no decimal
/// point, fractional ones are rounded to `precision` places and trimmed.
pub fn format_plain(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.*}", precision, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    // Tiny negatives round to "-0".
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a number for display, adding thousand separators when enabled.
pub fn format_display(value: f64, format: &NumberFormat) -> String {
    let plain = format_plain(value, format.precision);
    if !format.thousands_separator {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    format!("{}{}{}", sign, group_thousands(int_part), dec_part)
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
