//! Error types shared by every calculator.

use thiserror::Error;

/// A recoverable calculation failure.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Numeric input outside the supported domain.
    #[error("Number must be between 1 and 3999 (got {0})")]
    OutOfRange(String),

    /// Text that does not follow the Roman numeral grammar.
    #[error("Invalid Roman numeral '{0}'")]
    InvalidFormat(String),

    /// Token stream that is not `number (operator number)*`.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Please enter a value")]
    EmptyInput,

    /// Neither a decimal number nor a Roman numeral.
    #[error("Invalid input '{0}'. Please enter a number or Roman numeral")]
    UnrecognizedInput(String),

    #[error("Please enter a valid amount (got '{0}')")]
    InvalidAmount(String),

    /// A finite amount whose conversion does not fit in an f64.
    #[error("Amount '{0}' is too large to convert")]
    AmountTooLarge(String),

    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
