pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{Entry, Identity, LedgerStore, SessionStore};
use crate::store::{KeyValueCollection, KeyValueStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// A command the presentation layer can run against the core stores.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Login {
        name: String,
        email: String,
    },
    Logout,
    Whoami,
    Add {
        description: String,
        amount: String,
        kind: String,
        date: Option<String>,
    },
    Edit {
        row: usize,
        description: Option<String>,
        amount: Option<String>,
        kind: Option<String>,
        date: Option<String>,
    },
    Remove {
        rows: Vec<usize>,
        all: bool,
    },
    List,
    Summary,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("khata starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = KeyValueStore::open(&config.data_path()?)?;
    let sessions = store.collection::<Identity>("session")?;
    let ledgers = store.collection::<Vec<Entry>>("ledgers")?;
    let session = SessionStore::new(sessions, Arc::clone(&ledgers));

    match command {
        AppCommand::Login { name, email } => cli::session::login(&session, &name, &email),
        AppCommand::Logout => cli::session::logout(&session, &ledgers),
        AppCommand::Whoami => cli::session::whoami(&session),
        AppCommand::Add {
            description,
            amount,
            kind,
            date,
        } => {
            let mut ledger = active_ledger(&session, &ledgers)?;
            cli::entries::add(&mut ledger, description, amount, kind, date)
        }
        AppCommand::Edit {
            row,
            description,
            amount,
            kind,
            date,
        } => {
            let mut ledger = active_ledger(&session, &ledgers)?;
            cli::entries::edit(&mut ledger, row, description, amount, kind, date)
        }
        AppCommand::Remove { rows, all } => {
            let mut ledger = active_ledger(&session, &ledgers)?;
            cli::entries::remove(&mut ledger, &rows, all)
        }
        AppCommand::List => {
            let ledger = active_ledger(&session, &ledgers)?;
            cli::list::run(&config, &ledger)
        }
        AppCommand::Summary => {
            let ledger = active_ledger(&session, &ledgers)?;
            cli::summary::run(&config, &ledger)
        }
    }
}

/// Loads the ledger for the active session, failing when logged out.
fn active_ledger(
    session: &SessionStore,
    ledgers: &Arc<dyn KeyValueCollection<Vec<Entry>>>,
) -> Result<LedgerStore> {
    let identity = session
        .current()?
        .context("not logged in; run `khata login <name> <email>` first")?;
    Ok(LedgerStore::load(identity, Arc::clone(ledgers))?)
}
