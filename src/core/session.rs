//! Self-declared identity and the active-session record.

use crate::core::entry::Entry;
use crate::core::error::LedgerError;
use crate::core::ledger::ledger_key;
use crate::store::KeyValueCollection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Key holding the active session, present iff a user is logged in.
pub(crate) const SESSION_KEY: &str = "loggedInUser";

/// The self-declared user a ledger belongs to. The email partitions
/// persisted ledgers; there are no credentials, so this is not a security
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

pub struct SessionStore {
    sessions: Arc<dyn KeyValueCollection<Identity>>,
    ledgers: Arc<dyn KeyValueCollection<Vec<Entry>>>,
}

impl SessionStore {
    pub fn new(
        sessions: Arc<dyn KeyValueCollection<Identity>>,
        ledgers: Arc<dyn KeyValueCollection<Vec<Entry>>>,
    ) -> Self {
        Self { sessions, ledgers }
    }

    /// Starts a session for the given user. A first-seen email gets an
    /// empty persisted ledger; a known email reuses its existing one.
    /// Last login wins, there is no uniqueness check.
    pub fn login(&self, display_name: &str, email: &str) -> Result<Identity, LedgerError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(LedgerError::validation("name", "must not be empty"));
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(LedgerError::validation("email", "must not be empty"));
        }

        let identity = Identity {
            display_name: display_name.to_string(),
            email: email.to_string(),
        };

        // Ledger first: an active session must never point at a missing ledger.
        let key = ledger_key(&identity.email);
        if self.ledgers.get(&key)?.is_none() {
            self.ledgers.put(&key, &Vec::new())?;
        }
        self.sessions.put(SESSION_KEY, &identity)?;
        debug!("Session started for {}", identity.email);
        Ok(identity)
    }

    /// The active session's identity, `None` when logged out.
    pub fn current(&self) -> Result<Option<Identity>, LedgerError> {
        Ok(self.sessions.get(SESSION_KEY)?)
    }

    /// Ends the active session. The identity's persisted ledger remains
    /// untouched until that identity logs in again. A no-op when already
    /// logged out.
    pub fn logout(&self) -> Result<(), LedgerError> {
        self.sessions.remove(SESSION_KEY)?;
        debug!("Session ended");
        Ok(())
    }
}
