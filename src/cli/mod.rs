//! Terminal presentation layer: collects input for the core stores and
//! renders ledger state.

pub mod entries;
pub mod list;
pub mod session;
pub mod summary;
pub mod ui;
