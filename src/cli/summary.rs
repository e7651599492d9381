use super::ui;
use crate::core::analytics;
use crate::core::config::AppConfig;
use crate::core::ledger::LedgerStore;
use anyhow::Result;

/// Prints the aggregate income, expense and net totals for the ledger.
pub fn run(config: &AppConfig, ledger: &LedgerStore) -> Result<()> {
    let identity = ledger.identity();
    let totals = analytics::aggregate_totals(ledger.entries());
    let currency = &config.currency;

    println!(
        "Summary: {} {}",
        ui::style_text(&identity.display_name, ui::StyleType::Title),
        ui::style_text(&format!("<{}>", identity.email), ui::StyleType::Subtle)
    );
    println!();
    println!(
        "{} {}",
        ui::style_text(&format!("Total Income ({currency}): "), ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", totals.total_income), ui::StyleType::TotalValue)
    );
    println!(
        "{} {}",
        ui::style_text(&format!("Total Expense ({currency}):"), ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", totals.total_expense), ui::StyleType::Error)
    );

    let net_style = if totals.net_balance >= 0.0 {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };
    println!(
        "{} {}",
        ui::style_text(&format!("Net Balance ({currency}):  "), ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", totals.net_balance), net_style)
    );
    Ok(())
}
