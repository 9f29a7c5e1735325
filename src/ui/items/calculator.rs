//! Calculator item rendering.
//!
//! Renders the calculator result as a two-line block: the expression as a
//! muted title, then the result (or error) with an "= " prefix.

use crate::items::CalculatorItem;

use super::render_action_indicator;

/// Render a calculator item.
pub fn render_calculator(calc: &CalculatorItem, selected: bool) -> String {
    let mut lines = vec![format!("  {}", calc.expression)];

    let result_line = if calc.is_error {
        format!("! {}", calc.display_result)
    } else {
        format!("= {}", calc.display_result)
    };
    lines.push(result_line);

    if selected {
        lines.push(render_action_indicator("Copy"));
    }

    lines.join("\n")
}
