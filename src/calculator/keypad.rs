//! Button-driven basic calculator.
//!
//! Mirrors a physical keypad: digits build the current operand, an
//! operator finishes it, `=` evaluates everything typed so far left to
//! right. The state is owned by one keypad and lives only as long as it.

use tracing::debug;

use super::evaluation::{Operator, evaluate_expression, format_plain};

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Operator(char),
    Equals,
    Clear,
}

impl Key {
    /// Map a button label to a key. Unknown labels map to `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::Decimal),
            '+' | '-' | '*' | '/' => Some(Self::Operator(c)),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Keypad state: what the screen shows and the expression built so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypad {
    display: String,
    expression: String,
    waiting_for_operand: bool,
    error: bool,
    precision: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(super::DEFAULT_PRECISION)
    }
}

impl Keypad {
    pub fn new(precision: usize) -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            waiting_for_operand: false,
            error: false,
            precision,
        }
    }

    /// Text on the main display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The running expression shown above the display.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Whether the last `=` failed and the display shows `Error`.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Press every recognised key in `keys`, skipping whitespace and
    /// unknown characters.
    pub fn press_all(&mut self, keys: &str) {
        for key in keys.chars().filter_map(Key::from_char) {
            self.press(key);
        }
    }

    pub fn press(&mut self, key: Key) {
        // Typing after a failed evaluation starts over.
        if self.error && matches!(key, Key::Digit(_) | Key::Decimal | Key::Operator(_)) {
            self.clear();
        }

        match key {
            Key::Digit(d) => self.digit(d),
            Key::Decimal => self.decimal(),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    fn digit(&mut self, d: char) {
        if self.waiting_for_operand {
            self.display = d.to_string();
            self.expression.push(d);
            self.waiting_for_operand = false;
            return;
        }

        if self.display == "0" {
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }
        if self.expression == "0" {
            self.expression = d.to_string();
        } else {
            self.expression.push(d);
        }
    }

    fn operator(&mut self, op: char) {
        if self.waiting_for_operand {
            return;
        }
        self.expression.push_str(&format!(" {} ", op));
        self.display = op.to_string();
        self.waiting_for_operand = true;
    }

    fn decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.expression.push_str("0.");
            self.waiting_for_operand = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
            self.expression.push('.');
        }
    }

    fn equals(&mut self) {
        let tokens: Vec<&str> = strip_trailing_operator(&self.expression)
            .split_whitespace()
            .collect();

        match evaluate_expression(&tokens) {
            Ok(value) if value.is_finite() => {
                let formatted = format_plain(value, self.precision);
                debug!(expression = %self.expression, result = %formatted, "keypad evaluated");
                self.display = formatted.clone();
                self.expression = formatted;
                self.error = false;
            }
            outcome => {
                debug!(expression = %self.expression, ?outcome, "keypad evaluation failed");
                self.display = "Error".to_string();
                self.expression.clear();
                self.error = true;
            }
        }
        self.waiting_for_operand = false;
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.expression.clear();
        self.waiting_for_operand = false;
        self.error = false;
    }
}

/// Drop a dangling operator (and surrounding spaces) from the end.
fn strip_trailing_operator(expression: &str) -> &str {
    let trimmed = expression.trim_end();
    match trimmed.rsplit_once(' ') {
        Some((head, last)) if Operator::parse(last).is_some() => head.trim_end(),
        None if Operator::parse(trimmed).is_some() => "",
        _ => trimmed,
    }
}
