//! Errors the ledger core can raise.
//!
//! Every error is terminal to the operation that raised it: the operation
//! aborts with no state change and is never retried automatically.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was missing or failed to parse. Nothing was mutated.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The addressed entry does not exist, e.g. a stale row index.
    #[error("entry not found")]
    NotFound,

    /// The underlying store failed to read or write. In-memory state is
    /// only committed after a successful write, so no partial mutation
    /// survives this error.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl LedgerError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
