use crate::core::entry::EntryInput;
use crate::core::error::LedgerError;
use crate::core::ledger::{EntryRef, LedgerStore};
use anyhow::Result;

pub fn add(
    ledger: &mut LedgerStore,
    description: String,
    amount: String,
    kind: String,
    date: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
    let input = EntryInput {
        description,
        amount,
        kind,
        date,
    };

    let position = ledger.create(&input)?;
    println!("Added entry at row {}.", position + 1);
    Ok(())
}

pub fn edit(
    ledger: &mut LedgerStore,
    row: usize,
    description: Option<String>,
    amount: Option<String>,
    kind: Option<String>,
    date: Option<String>,
) -> Result<()> {
    if description.is_none() && amount.is_none() && kind.is_none() && date.is_none() {
        anyhow::bail!(
            "nothing to change; pass at least one of --description, --amount, --kind, --date"
        );
    }

    let index = to_index(row)?;
    let existing = ledger
        .entries()
        .get(index)
        .ok_or(LedgerError::NotFound)?
        .clone();
    let id = existing.id;

    // Unchanged fields carry over from the entry being edited
    let input = EntryInput {
        description: description.unwrap_or(existing.description),
        amount: amount.unwrap_or_else(|| existing.amount.to_string()),
        kind: kind.unwrap_or_else(|| existing.kind.to_string()),
        date: date.unwrap_or_else(|| existing.date.to_string()),
    };

    let position = ledger.update(EntryRef::Id(id), &input)?;
    println!("Updated row {row}; entry is now at row {}.", position + 1);
    Ok(())
}

pub fn remove(ledger: &mut LedgerStore, rows: &[usize], all: bool) -> Result<()> {
    let positions: Vec<usize> = if all {
        (0..ledger.len()).collect()
    } else {
        if rows.is_empty() {
            anyhow::bail!("specify one or more row numbers, or --all");
        }
        rows.iter().map(|&row| to_index(row)).collect::<Result<_>>()?
    };

    let removed = ledger.delete_positions(&positions)?;
    println!(
        "Deleted {removed} {}.",
        if removed == 1 { "entry" } else { "entries" }
    );
    Ok(())
}

// Rows shown to the user are 1-based
fn to_index(row: usize) -> Result<usize> {
    row.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("rows are numbered from 1"))
}
