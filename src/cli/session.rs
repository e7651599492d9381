use super::ui;
use crate::core::entry::Entry;
use crate::core::ledger::LedgerStore;
use crate::core::session::SessionStore;
use crate::store::KeyValueCollection;
use anyhow::Result;
use std::sync::Arc;

pub fn login(session: &SessionStore, name: &str, email: &str) -> Result<()> {
    let identity = session.login(name, email)?;
    println!(
        "Logged in as {} {}",
        ui::style_text(&identity.display_name, ui::StyleType::Title),
        ui::style_text(&format!("<{}>", identity.email), ui::StyleType::Subtle)
    );
    Ok(())
}

pub fn logout(
    session: &SessionStore,
    ledgers: &Arc<dyn KeyValueCollection<Vec<Entry>>>,
) -> Result<()> {
    match session.current()? {
        Some(identity) => {
            let mut ledger = LedgerStore::load(identity.clone(), Arc::clone(ledgers))?;
            session.logout()?;
            ledger.clear();
            println!("Logged out {}.", identity.display_name);
        }
        None => println!("No active session."),
    }
    Ok(())
}

pub fn whoami(session: &SessionStore) -> Result<()> {
    match session.current()? {
        Some(identity) => println!(
            "{} {}",
            identity.display_name,
            ui::style_text(&format!("<{}>", identity.email), ui::StyleType::Subtle)
        ),
        None => println!("Not logged in. Run `khata login <name> <email>`."),
    }
    Ok(())
}
