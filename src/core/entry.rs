//! The ledger line item and its input validation.

use crate::core::error::LedgerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntryKind::Income => "income",
                EntryKind::Expense => "expense",
            }
        )
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(LedgerError::validation(
                "kind",
                format!("expected `income` or `expense`, got `{other}`"),
            )),
        }
    }
}

/// One ledger line item.
///
/// `amount` is always a non-negative magnitude; the sign of a transaction
/// lives in `kind` and is applied only during aggregation. `id` is assigned
/// at creation, immutable, and used purely for identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub date: NaiveDate,
}

impl Entry {
    /// The amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Raw field strings collected by the presentation layer.
///
/// Validation happens here, at the store boundary, so every caller gets the
/// same rules regardless of how the input was gathered.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub date: String,
}

/// The validated mutable fields of an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub date: NaiveDate,
}

impl EntryFields {
    pub(crate) fn into_entry(self, id: Uuid) -> Entry {
        Entry {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
        }
    }
}

impl EntryInput {
    /// Validates all four fields, returning the parsed values or the first
    /// failure. No field may be blank; `amount` must parse as a finite
    /// non-negative number; `date` must be a `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> Result<EntryFields, LedgerError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LedgerError::validation(
                "description",
                "must not be empty",
            ));
        }

        let amount_str = self.amount.trim();
        if amount_str.is_empty() {
            return Err(LedgerError::validation("amount", "must not be empty"));
        }
        let amount: f64 = amount_str.parse().map_err(|_| {
            LedgerError::validation("amount", format!("`{amount_str}` is not a number"))
        })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::validation(
                "amount",
                format!("`{amount_str}` is not a non-negative number"),
            ));
        }

        let kind: EntryKind = self.kind.parse()?;

        let date_str = self.date.trim();
        if date_str.is_empty() {
            return Err(LedgerError::validation("date", "must not be empty"));
        }
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            LedgerError::validation("date", format!("`{date_str}` is not a YYYY-MM-DD date"))
        })?;

        Ok(EntryFields {
            description: description.to_string(),
            amount,
            kind,
            date,
        })
    }
}
