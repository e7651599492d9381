//! The authoritative in-memory copy of one identity's entries, kept in
//! sync with persistent storage.

use crate::core::entry::{Entry, EntryInput};
use crate::core::error::LedgerError;
use crate::core::session::Identity;
use crate::store::KeyValueCollection;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub(crate) fn ledger_key(email: &str) -> String {
    format!("expenses_{email}")
}

/// Addresses an entry by its current position or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    Position(usize),
    Id(Uuid),
}

/// One identity's ledger.
///
/// Invariants held after every mutation:
/// - entries are sorted ascending by date, ties keeping their prior
///   relative order;
/// - the whole collection has been written back to the store before the
///   in-memory copy changes, so a failed write leaves no partial state.
pub struct LedgerStore {
    identity: Identity,
    entries: Vec<Entry>,
    collection: Arc<dyn KeyValueCollection<Vec<Entry>>>,
}

// Stable: entries sharing a date keep their prior relative order.
fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| entry.date);
}

impl LedgerStore {
    /// Loads the persisted entries for `identity`. A missing collection is
    /// a valid empty ledger, not an error.
    pub fn load(
        identity: Identity,
        collection: Arc<dyn KeyValueCollection<Vec<Entry>>>,
    ) -> Result<Self, LedgerError> {
        let entries = collection.get(&ledger_key(&identity.email))?.unwrap_or_default();
        debug!(count = entries.len(), "Loaded ledger for {}", identity.email);
        Ok(Self {
            identity,
            entries,
            collection,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates `input`, appends it as a new entry with a fresh id, and
    /// returns the position it sorted into.
    pub fn create(&mut self, input: &EntryInput) -> Result<usize, LedgerError> {
        let fields = input.validate()?;
        let entry = fields.into_entry(Uuid::new_v4());
        let id = entry.id;

        let mut next = self.entries.clone();
        next.push(entry);
        sort_by_date(&mut next);
        let position = position_of(&next, id)?;

        self.commit(next)?;
        debug!(%id, position, "Created entry");
        Ok(position)
    }

    /// Replaces the mutable fields of the addressed entry, preserving its
    /// id, and returns the position it sorted into.
    pub fn update(&mut self, target: EntryRef, input: &EntryInput) -> Result<usize, LedgerError> {
        let index = self.resolve(target)?;
        let fields = input.validate()?;
        let id = self.entries[index].id;

        let mut next = self.entries.clone();
        next[index] = fields.into_entry(id);
        sort_by_date(&mut next);
        let position = position_of(&next, id)?;

        self.commit(next)?;
        debug!(%id, position, "Updated entry");
        Ok(position)
    }

    /// Removes the addressed entry.
    pub fn delete(&mut self, target: EntryRef) -> Result<(), LedgerError> {
        let index = self.resolve(target)?;
        let mut next = self.entries.clone();
        let removed = next.remove(index);

        self.commit(next)?;
        debug!(id = %removed.id, "Deleted entry");
        Ok(())
    }

    /// Removes the entries at the given positions and returns how many
    /// were removed. Positions are applied from highest to lowest so that
    /// earlier removals cannot shift later targets.
    pub fn delete_positions(&mut self, positions: &[usize]) -> Result<usize, LedgerError> {
        let mut ordered = positions.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();
        if ordered.first().is_some_and(|&p| p >= self.entries.len()) {
            return Err(LedgerError::NotFound);
        }

        let mut next = self.entries.clone();
        for &position in &ordered {
            next.remove(position);
        }
        let removed = ordered.len();

        self.commit(next)?;
        debug!(removed, "Deleted entries");
        Ok(removed)
    }

    /// Drops the in-memory entries. The persisted copy is untouched and is
    /// picked up again the next time this identity logs in.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn resolve(&self, target: EntryRef) -> Result<usize, LedgerError> {
        match target {
            EntryRef::Position(index) if index < self.entries.len() => Ok(index),
            EntryRef::Position(_) => Err(LedgerError::NotFound),
            EntryRef::Id(id) => position_of(&self.entries, id),
        }
    }

    fn commit(&mut self, next: Vec<Entry>) -> Result<(), LedgerError> {
        self.collection
            .put(&ledger_key(&self.identity.email), &next)?;
        self.entries = next;
        Ok(())
    }
}

fn position_of(entries: &[Entry], id: Uuid) -> Result<usize, LedgerError> {
    entries
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(LedgerError::NotFound)
}
