//! Plain-text presentation of widgets and their results.

pub mod items;

pub use items::render_item;

use crate::widget::Widget;

/// Render the sidebar, marking the active widget.
pub fn render_widget_list(active: Option<Widget>) -> String {
    Widget::ALL
        .iter()
        .map(|&widget| {
            let marker = if Some(widget) == active { '>' } else { ' ' };
            format!("{} {:<10} {}", marker, widget.slug(), widget.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_list_marks_active() {
        let list = render_widget_list(Some(Widget::Bmi));
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), Widget::ALL.len());
        assert_eq!(lines[0], "  basic      Basic Calculator");
        assert_eq!(lines[6], "> bmi        BMI Calculator");
    }
}
