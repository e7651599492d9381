use crate::core::EntryKind;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a cell for an entry amount, color-coded by kind.
pub fn amount_cell(amount: f64, kind: EntryKind) -> Cell {
    let color = match kind {
        EntryKind::Income => Color::Green,
        EntryKind::Expense => Color::Red,
    };
    Cell::new(format!("{amount:.2}"))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Creates a cell for a kind label with the same color coding as amounts.
pub fn kind_cell(kind: EntryKind) -> Cell {
    let color = match kind {
        EntryKind::Income => Color::Green,
        EntryKind::Expense => Color::Red,
    };
    Cell::new(kind).fg(color)
}

/// Creates a cell for a signed balance: green when non-negative, red
/// otherwise.
pub fn balance_cell(balance: f64) -> Cell {
    let color = if balance >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(format!("{balance:.2}"))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}
