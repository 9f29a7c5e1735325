//! Area and BMI items.

use serde::Serialize;

use crate::bmi::Bmi;
use crate::geometry::{Shape, ShapeKind, format_area};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaItem {
    pub id: String,
    pub kind: ShapeKind,
    /// Inputs as typed, in field order.
    pub inputs: Vec<String>,
    pub shape: Option<Shape>,
    /// Area with two decimals, None when the inputs gave no result.
    pub area: Option<String>,
}

impl AreaItem {
    pub fn new<S: AsRef<str>>(kind: ShapeKind, inputs: &[S]) -> Self {
        let shape = Shape::from_inputs(kind, inputs);
        Self {
            id: format!("{}-area", kind.name()),
            kind,
            inputs: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
            shape,
            area: shape.map(|s| format_area(s.area())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BmiItem {
    pub id: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub bmi: Option<Bmi>,
}

impl BmiItem {
    pub fn new(height_cm: &str, weight_kg: &str, bmi: Option<Bmi>) -> Self {
        Self {
            id: "bmi-result".to_string(),
            height_cm: height_cm.to_string(),
            weight_kg: weight_kg.to_string(),
            bmi,
        }
    }

    /// `22.49 (Normal Weight)`
    pub fn summary(&self) -> Option<String> {
        self.bmi
            .map(|bmi| format!("{:.2} ({})", bmi.value, bmi.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::compute_bmi;

    #[test]
    fn test_area_item() {
        let item = AreaItem::new(ShapeKind::Circle, &["1"]);
        assert_eq!(item.id, "circle-area");
        assert_eq!(item.area.as_deref(), Some("3.14"));

        let item = AreaItem::new(ShapeKind::Square, &["x"]);
        assert_eq!(item.shape, None);
        assert_eq!(item.area, None);
    }

    #[test]
    fn test_bmi_item_summary() {
        let item = BmiItem::new("170", "65", compute_bmi("170", "65"));
        assert_eq!(item.summary().as_deref(), Some("22.49 (Normal Weight)"));

        let item = BmiItem::new("", "65", compute_bmi("", "65"));
        assert_eq!(item.summary(), None);
    }
}
