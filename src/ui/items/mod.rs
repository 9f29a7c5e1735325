mod calculator;

pub use calculator::render_calculator;

use crate::items::ResultItem;

/// Render any result item based on its type.
/// This is the main dispatch function for item rendering.
pub fn render_item(item: &ResultItem, selected: bool) -> String {
    match item {
        ResultItem::Calculator(calc) => render_calculator(calc, selected),
        _ => render_generic(item, selected),
    }
}

/// Render the action hint shown under a selected item.
pub fn render_action_indicator(label: &str) -> String {
    format!("  [{}]", label)
}

/// Render a title line and an optional description line.
pub fn render_text_content(title: &str, description: Option<&str>) -> String {
    match description {
        Some(desc) => format!("  {}\n= {}", title, desc),
        None => format!("  {}\n= no result", title),
    }
}

fn render_generic(item: &ResultItem, selected: bool) -> String {
    let name = item.name();
    let description = item.description();

    let mut text = if item.is_error() {
        format!("  {}\n! {}", name, description.as_deref().unwrap_or_default())
    } else {
        render_text_content(&name, description.as_deref())
    };

    if selected && item.text_for_clipboard().is_some() {
        text.push('\n');
        text.push_str(&render_action_indicator("Copy"));
    }

    text
}
