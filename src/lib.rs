//! # calcdeck
//!
//! A handful of small calculators that share one set of error types and
//! formatting rules:
//!
//! * basic arithmetic, evaluated strictly left to right (`2 + 3 * 4 = 20`)
//! * Roman numeral conversion in both directions, for 1 to 3999
//! * areas of squares, rectangles, triangles, circles and trapezoids
//! * body-mass index
//! * currency conversion against a fixed table of rates
//!
//! Every calculation is a plain function call with no hidden state.

pub mod bmi;
pub mod calculator;
pub mod config;
pub mod currency;
pub mod error;
pub mod geometry;
pub mod items;
pub mod logging;
pub mod roman;
pub mod ui;
pub mod widget;

pub use calculator::evaluate_expression;
pub use error::{CalcError, Result};
pub use roman::{decode_roman, encode_roman};
