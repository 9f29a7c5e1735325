mod calculator;
mod conversion;
mod measure;

pub use calculator::CalculatorItem;
pub use conversion::{CurrencyItem, RomanItem};
pub use measure::{AreaItem, BmiItem};

use serde::Serialize;
use tracing::debug;

use crate::calculator::{InputKind, NumberFormat, calculate, detect_input};
use crate::roman::convert_roman;
use crate::widget::Widget;

/// The outcome of running one widget, ready to render or serialize.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum ResultItem {
    /// A basic calculator or keypad result
    Calculator(CalculatorItem),
    /// A Roman numeral conversion
    Roman(RomanItem),
    /// A shape area
    Area(AreaItem),
    /// A body-mass index
    Bmi(BmiItem),
    /// A currency conversion
    Currency(CurrencyItem),
}

impl ResultItem {
    /// Get the unique identifier for this item.
    pub fn id(&self) -> &str {
        match self {
            Self::Calculator(calc) => &calc.id,
            Self::Roman(roman) => &roman.id,
            Self::Area(area) => &area.id,
            Self::Bmi(bmi) => &bmi.id,
            Self::Currency(cur) => &cur.id,
        }
    }

    /// Get the input the user gave, as a single line.
    pub fn name(&self) -> String {
        match self {
            Self::Calculator(calc) => calc.expression.clone(),
            Self::Roman(roman) => roman.input.clone(),
            Self::Area(area) => {
                let fields = area.kind.fields().iter().zip(&area.inputs);
                fields
                    .map(|(field, value)| format!("{}={}", field, value))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            Self::Bmi(bmi) => format!("{} cm, {} kg", bmi.height_cm, bmi.weight_kg),
            Self::Currency(cur) => cur.request.clone(),
        }
    }

    /// Get the result line, or the error message.
    /// None when the widget produced no result.
    pub fn description(&self) -> Option<String> {
        match self {
            Self::Calculator(calc) => Some(calc.display_result.clone()),
            Self::Roman(roman) => Some(roman.display_result.clone()),
            Self::Area(area) => area.area.clone(),
            Self::Bmi(bmi) => bmi.summary(),
            Self::Currency(cur) => Some(cur.display_result.clone()),
        }
    }

    /// Check if this item carries an error message.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Calculator(calc) => calc.is_error,
            Self::Roman(roman) => roman.is_error,
            Self::Area(_) | Self::Bmi(_) => false,
            Self::Currency(cur) => cur.is_error,
        }
    }

    /// Whether the widget produced a usable value.
    pub fn has_result(&self) -> bool {
        !self.is_error() && self.description().is_some()
    }

    /// Get the text to copy to the clipboard, if there is any.
    pub fn text_for_clipboard(&self) -> Option<String> {
        match self {
            Self::Calculator(calc) => Some(calc.text_for_clipboard().to_string()),
            Self::Roman(roman) => Some(roman.display_result.clone()),
            Self::Area(area) => area.area.clone(),
            Self::Bmi(bmi) => bmi.bmi.map(|b| format!("{:.2}", b.value)),
            Self::Currency(cur) => Some(
                cur.clipboard_result
                    .clone()
                    .unwrap_or_else(|| cur.display_result.clone()),
            ),
        }
    }

    /// Get the widget that produced this item.
    pub fn widget(&self) -> Widget {
        match self {
            Self::Calculator(_) => Widget::Basic,
            Self::Roman(_) => Widget::Roman,
            Self::Area(area) => Widget::Area(area.kind),
            Self::Bmi(_) => Widget::Bmi,
            Self::Currency(_) => Widget::Currency,
        }
    }

    /// Get the section name for this item type.
    pub fn section_name(&self) -> &'static str {
        self.widget().label()
    }
}

/// Route `input` by its shape: numbers and Roman letters go to the Roman
/// converter, everything else to the left-to-right evaluator.
///
/// Empty input lands in the Roman converter so the user gets its
/// "Please enter a value" message.
pub fn run_auto(input: &str, format: &NumberFormat) -> ResultItem {
    let kind = detect_input(input);
    debug!(?kind, "detected input");

    match kind {
        InputKind::Empty | InputKind::Integer | InputKind::Roman => {
            RomanItem::from_result(input, convert_roman(input)).into()
        }
        InputKind::Expression | InputKind::Unknown => {
            CalculatorItem::from_calc_result(calculate(input, format)).into()
        }
    }
}

// Convenient From implementations

impl From<CalculatorItem> for ResultItem {
    fn from(item: CalculatorItem) -> Self {
        Self::Calculator(item)
    }
}

impl From<RomanItem> for ResultItem {
    fn from(item: RomanItem) -> Self {
        Self::Roman(item)
    }
}

impl From<AreaItem> for ResultItem {
    fn from(item: AreaItem) -> Self {
        Self::Area(item)
    }
}

impl From<BmiItem> for ResultItem {
    fn from(item: BmiItem) -> Self {
        Self::Bmi(item)
    }
}

impl From<CurrencyItem> for ResultItem {
    fn from(item: CurrencyItem) -> Self {
        Self::Currency(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;
    use crate::roman::convert_roman;

    #[test]
    fn test_area_item_accessors() {
        let item: ResultItem = AreaItem::new(ShapeKind::Rectangle, &["4", "2"]).into();
        assert_eq!(item.id(), "rectangle-area");
        assert_eq!(item.name(), "length=4 width=2");
        assert_eq!(item.description().as_deref(), Some("8.00"));
        assert_eq!(item.section_name(), "Rectangle Area");
        assert!(item.has_result());
    }

    #[test]
    fn test_no_result_is_not_an_error() {
        let item: ResultItem = AreaItem::new(ShapeKind::Circle, &["r"]).into();
        assert!(!item.is_error());
        assert!(!item.has_result());
        assert_eq!(item.text_for_clipboard(), None);
    }

    #[test]
    fn test_error_item() {
        let item: ResultItem = RomanItem::from_result("IIII", convert_roman("IIII")).into();
        assert!(item.is_error());
        assert!(!item.has_result());
        assert_eq!(item.widget(), Widget::Roman);
    }

    #[test]
    fn test_run_auto_routes_numbers_to_roman() {
        let format = NumberFormat::default();

        let item = run_auto("1994", &format);
        assert_eq!(item.widget(), Widget::Roman);
        assert_eq!(item.description().as_deref(), Some("MCMXCIV"));

        let item = run_auto("mcmxciv", &format);
        assert_eq!(item.widget(), Widget::Roman);
        assert_eq!(item.description().as_deref(), Some("1994"));
        assert!(item.has_result());
    }

    #[test]
    fn test_run_auto_routes_expressions_to_calculator() {
        let item = run_auto("2+3*4", &NumberFormat::default());
        assert_eq!(item.widget(), Widget::Basic);
        assert_eq!(item.description().as_deref(), Some("20"));
        assert_eq!(item.text_for_clipboard().as_deref(), Some("20"));
    }

    #[test]
    fn test_run_auto_empty_and_unknown_input() {
        let format = NumberFormat::default();

        let item = run_auto("   ", &format);
        assert_eq!(item.widget(), Widget::Roman);
        assert!(item.is_error());
        assert_eq!(item.description().as_deref(), Some("Please enter a value"));

        let item = run_auto("hello", &format);
        assert_eq!(item.widget(), Widget::Basic);
        assert!(item.is_error());
        assert!(!item.has_result());
        assert_eq!(
            item.description().as_deref(),
            Some("Malformed expression: unexpected character 'h'")
        );
    }

    #[test]
    fn test_json_shape() {
        let item: ResultItem = RomanItem::from_result("4", convert_roman("4")).into();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["widget"], "roman");
        assert_eq!(json["display_result"], "IV");
        assert_eq!(json["direction"], "to_roman");
    }
}
