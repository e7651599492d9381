//! Core ledger model and derived calculations.

pub mod analytics;
pub mod config;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod log;
pub mod session;

// Re-export main types for cleaner imports
pub use entry::{Entry, EntryInput, EntryKind};
pub use error::LedgerError;
pub use ledger::{EntryRef, LedgerStore};
pub use session::{Identity, SessionStore};
