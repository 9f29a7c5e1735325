//! Area formulas for the shape widgets.
//!
//! Inputs arrive as raw text. Anything that is not a finite, non-negative
//! number produces no result rather than an error.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The shapes with an area widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
    Circle,
    Trapezoid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        Self::Square,
        Self::Rectangle,
        Self::Triangle,
        Self::Circle,
        Self::Trapezoid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Trapezoid => "trapezoid",
        }
    }

    /// Names of the inputs, in the order [`Shape::from_inputs`] expects them.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Square => &["side"],
            Self::Rectangle => &["length", "width"],
            Self::Triangle => &["base", "height"],
            Self::Circle => &["radius"],
            Self::Trapezoid => &["base1", "base2", "height"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shape '{}'", s))
    }
}

/// A shape with validated dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
    Triangle { base: f64, height: f64 },
    Circle { radius: f64 },
    Trapezoid { base1: f64, base2: f64, height: f64 },
}

impl Shape {
    /// Build a shape from raw text inputs.
    ///
    /// Returns `None` when the input count is wrong, any value is not a
    /// finite, non-negative number, or the area overflows.
    pub fn from_inputs<S: AsRef<str>>(kind: ShapeKind, inputs: &[S]) -> Option<Self> {
        if inputs.len() != kind.fields().len() {
            return None;
        }
        let v: Vec<f64> = inputs
            .iter()
            .map(|s| parse_dimension(s.as_ref()))
            .collect::<Option<_>>()?;

        let shape = match kind {
            ShapeKind::Square => Self::Square { side: v[0] },
            ShapeKind::Rectangle => Self::Rectangle {
                length: v[0],
                width: v[1],
            },
            ShapeKind::Triangle => Self::Triangle {
                base: v[0],
                height: v[1],
            },
            ShapeKind::Circle => Self::Circle { radius: v[0] },
            ShapeKind::Trapezoid => Self::Trapezoid {
                base1: v[0],
                base2: v[1],
                height: v[2],
            },
        };

        shape.area().is_finite().then_some(shape)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Square { .. } => ShapeKind::Square,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Triangle { .. } => ShapeKind::Triangle,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Trapezoid { .. } => ShapeKind::Trapezoid,
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Self::Square { side } => side * side,
            Self::Rectangle { length, width } => length * width,
            Self::Triangle { base, height } => base * height / 2.0,
            Self::Circle { radius } => PI * radius * radius,
            Self::Trapezoid {
                base1,
                base2,
                height,
            } => (base1 + base2) * height / 2.0,
        }
    }
}

/// Parse inputs and compute the area in one step.
pub fn compute_area<S: AsRef<str>>(kind: ShapeKind, inputs: &[S]) -> Option<f64> {
    Shape::from_inputs(kind, inputs).map(|shape| shape.area())
}

/// Areas are shown with two decimals.
pub fn format_area(area: f64) -> String {
    format!("{:.2}", area)
}

fn parse_dimension(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formulas() {
        assert_eq!(compute_area(ShapeKind::Square, &["3"]), Some(9.0));
        assert_eq!(compute_area(ShapeKind::Rectangle, &["4", "2.5"]), Some(10.0));
        assert_eq!(compute_area(ShapeKind::Triangle, &["6", "3"]), Some(9.0));
        assert_eq!(
            compute_area(ShapeKind::Trapezoid, &["3", "5", "4"]),
            Some(16.0)
        );
        let circle = compute_area(ShapeKind::Circle, &["2"]).unwrap();
        assert!((circle - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_no_result_for_bad_input() {
        assert_eq!(compute_area(ShapeKind::Square, &["abc"]), None);
        assert_eq!(compute_area(ShapeKind::Square, &[""]), None);
        assert_eq!(compute_area(ShapeKind::Circle, &["-1"]), None);
        assert_eq!(compute_area(ShapeKind::Circle, &["inf"]), None);
        assert_eq!(compute_area(ShapeKind::Rectangle, &["2"]), None);
        assert_eq!(compute_area(ShapeKind::Triangle, &["2", "3", "4"]), None);
    }

    #[test]
    fn test_no_result_when_area_overflows() {
        assert_eq!(compute_area(ShapeKind::Square, &["1e200"]), None);
        assert_eq!(compute_area(ShapeKind::Circle, &["1e160"]), None);
        assert!(Shape::from_inputs(ShapeKind::Rectangle, &["1e300", "1e10"]).is_none());

        let large = compute_area(ShapeKind::Square, &["1e150"]).unwrap();
        assert!(large.is_finite());
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(12.566370614359172), "12.57");
        assert_eq!(format_area(9.0), "9.00");
    }

    #[test]
    fn test_shape_kind_parsing() {
        assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(" trapezoid ".parse::<ShapeKind>(), Ok(ShapeKind::Trapezoid));
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_shape_remembers_kind() {
        let shape = Shape::from_inputs(ShapeKind::Trapezoid, &["1", "2", "3"]).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Trapezoid);
    }
}
