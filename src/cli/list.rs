use super::ui;
use crate::core::analytics;
use crate::core::config::AppConfig;
use crate::core::ledger::LedgerStore;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the ledger as a numbered table with a running balance per row.
pub fn run(config: &AppConfig, ledger: &LedgerStore) -> Result<()> {
    let identity = ledger.identity();
    println!(
        "Ledger: {} {}",
        ui::style_text(&identity.display_name, ui::StyleType::Title),
        ui::style_text(&format!("<{}>", identity.email), ui::StyleType::Subtle)
    );

    if ledger.is_empty() {
        println!(
            "\n{}",
            ui::style_text("No entries yet. Add one with `khata add`.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let currency = &config.currency;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Description"),
        ui::header_cell(&format!("Amount ({currency})")),
        ui::header_cell("Kind"),
        ui::header_cell("Date"),
        ui::header_cell(&format!("Balance ({currency})")),
    ]);

    let entries = ledger.entries();
    for (index, entry) in entries.iter().enumerate() {
        let balance = analytics::running_balance(entries, index);
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.description),
            ui::amount_cell(entry.amount, entry.kind),
            ui::kind_cell(entry.kind),
            Cell::new(entry.date),
            ui::balance_cell(balance),
        ]);
    }

    println!("\n{table}");
    Ok(())
}
