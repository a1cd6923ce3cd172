//! Emergency contacts management.

use clap::Subcommand;
use moodlog_core::{parse_contacts, sos::MAX_CONTACTS};

#[derive(Subcommand)]
pub enum ContactsAction {
    /// Set the raw comma-separated contacts string
    Set {
        /// Comma-separated contacts, e.g. "+911234567890, +919876543210"
        raw: String,
    },
    /// Show the raw string and the parsed contact list
    Show,
}

pub fn run(action: ContactsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ContactsAction::Set { raw } => {
            let mut journal = super::open_journal()?;
            let parsed = parse_contacts(&raw);
            journal.set_contacts(raw)?;
            println!(
                "ok ({} contact{} will receive alerts, max {MAX_CONTACTS})",
                parsed.len(),
                if parsed.len() == 1 { "" } else { "s" }
            );
        }
        ContactsAction::Show => {
            let journal = super::open_journal()?;
            let raw = journal.contacts_raw();
            if raw.trim().is_empty() {
                println!("no contacts configured");
            } else {
                println!("raw: {raw}");
                for contact in parse_contacts(raw) {
                    println!("  - {contact}");
                }
            }
        }
    }
    Ok(())
}
