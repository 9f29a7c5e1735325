//! Body-mass index.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value using the usual 18.5 / 25 / 30 cut-offs.
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bmi {
    /// kg/m², rounded to two decimals.
    pub value: f64,
    pub category: BmiCategory,
}

/// Compute BMI from height in centimetres and weight in kilograms.
///
/// Both inputs must be positive finite numbers, otherwise there is no result.
pub fn compute_bmi(height_cm: &str, weight_kg: &str) -> Option<Bmi> {
    let height = parse_positive(height_cm)?;
    let weight = parse_positive(weight_kg)?;

    let height_m = height / 100.0;
    let value = round2(weight / (height_m * height_m));
    if !value.is_finite() {
        return None;
    }

    Some(Bmi {
        value,
        category: BmiCategory::from_value(value),
    })
}

fn parse_positive(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn round2(value: f64) -> f64 {
    if value.abs() >= 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi() {
        let bmi = compute_bmi("180", "81").unwrap();
        assert_eq!(bmi.value, 25.0);
        assert_eq!(bmi.category, BmiCategory::Overweight);

        let bmi = compute_bmi("170", "65").unwrap();
        assert_eq!(bmi.value, 22.49);
        assert_eq!(bmi.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_categories() {
        assert_eq!(BmiCategory::from_value(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_value(24.95), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_value(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obesity);
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal Weight");
    }

    #[test]
    fn test_missing_or_invalid_inputs() {
        assert_eq!(compute_bmi("", "70"), None);
        assert_eq!(compute_bmi("175", "abc"), None);
        assert_eq!(compute_bmi("0", "70"), None);
        assert_eq!(compute_bmi("175", "-70"), None);
    }

    #[test]
    fn test_extreme_inputs() {
        assert_eq!(compute_bmi("0.0001", "1e308"), None);

        let bmi = compute_bmi("100", "1e300").unwrap();
        assert_eq!(bmi.value, 1e300);
        assert_eq!(bmi.category, BmiCategory::Obesity);
    }
}
