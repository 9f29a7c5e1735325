//! Basic calculator.
//!
//! This module provides functionality to:
//! - Split free-form input into tokens
//! - Detect what kind of value the user typed
//! - Evaluate token streams strictly left to right
//! - Drive the evaluator from keypad buttons
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod evaluation;
mod keypad;
mod tokens;

pub use clipboard::copy_to_clipboard;
pub use detection::{InputKind, detect_input, looks_like_expression};
pub use evaluation::{
    CalcResult, DEFAULT_PRECISION, NumberFormat, Operator, calculate, evaluate_expression,
    format_display, format_plain,
};
pub use keypad::{Key, Keypad};
pub use tokens::tokenize;
