//! The sidebar catalogue of calculator widgets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::geometry::ShapeKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    #[default]
    Basic,
    Area(ShapeKind),
    Bmi,
    Roman,
    Currency,
}

impl Widget {
    /// Sidebar order.
    pub const ALL: [Widget; 9] = [
        Self::Basic,
        Self::Area(ShapeKind::Square),
        Self::Area(ShapeKind::Circle),
        Self::Area(ShapeKind::Triangle),
        Self::Area(ShapeKind::Rectangle),
        Self::Area(ShapeKind::Trapezoid),
        Self::Bmi,
        Self::Roman,
        Self::Currency,
    ];

    /// Stable identifier, also accepted by [`FromStr`].
    pub fn slug(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Area(kind) => kind.name(),
            Self::Bmi => "bmi",
            Self::Roman => "roman",
            Self::Currency => "currency",
        }
    }

    /// Sidebar button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Calculator",
            Self::Area(ShapeKind::Square) => "Square Area",
            Self::Area(ShapeKind::Circle) => "Circle Area",
            Self::Area(ShapeKind::Triangle) => "Triangle Area",
            Self::Area(ShapeKind::Rectangle) => "Rectangle Area",
            Self::Area(ShapeKind::Trapezoid) => "Trapezoid Area",
            Self::Bmi => "BMI Calculator",
            Self::Roman => "Roman Numerals",
            Self::Currency => "Currency Converter",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Widget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown widget '{}'", s))
    }
}
