//! Pure derivations over a ledger snapshot.
//!
//! Both functions hold no state and assume the snapshot is sorted
//! ascending by date, which the ledger store maintains after every
//! mutation.

use crate::core::entry::{Entry, EntryKind};

/// Aggregate totals over a whole ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
}

/// The signed cumulative balance at `upto`: sums every entry at a position
/// up to and including `upto` whose date is on or before the date of the
/// entry at `upto`. Income adds, expense subtracts.
///
/// This is an O(n) scan per call; recomputing it for every row of a render
/// is the accepted cost at this system's scale.
///
/// Panics if `upto` is out of bounds.
pub fn running_balance(entries: &[Entry], upto: usize) -> f64 {
    let target_date = entries[upto].date;
    entries[..=upto]
        .iter()
        .filter(|entry| entry.date <= target_date)
        .map(Entry::signed_amount)
        .sum()
}

/// Sums income and expense magnitudes over the whole ledger.
/// Order-independent.
pub fn aggregate_totals(entries: &[Entry]) -> Totals {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    for entry in entries {
        match entry.kind {
            EntryKind::Income => total_income += entry.amount,
            EntryKind::Expense => total_expense += entry.amount,
        }
    }
    Totals {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}
