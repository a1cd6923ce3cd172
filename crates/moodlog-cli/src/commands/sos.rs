//! SOS alert dispatch commands.

use clap::Subcommand;
use moodlog_core::{parse_contacts, Config, DispatchOutcome};

#[derive(Subcommand)]
pub enum SosAction {
    /// Send a test alert through the configured endpoint
    Test,
    /// Show dispatch configuration status
    Status,
}

pub fn run(action: SosAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SosAction::Test => {
            let journal = super::open_journal()?;
            let rt = tokio::runtime::Runtime::new()?;
            let outcome = rt.block_on(journal.test_dispatch());
            match outcome {
                DispatchOutcome::Sent => println!("test alert sent"),
                DispatchOutcome::Skipped { reason } => {
                    println!("skipped: {}", serde_json::to_string(&reason)?);
                }
                DispatchOutcome::Failed { reason } => println!("failed: {reason}"),
            }
        }
        SosAction::Status => {
            let config = Config::load_or_default();
            let journal = super::open_journal()?;
            let contacts = parse_contacts(journal.contacts_raw());
            match config.sos_endpoint() {
                Some(endpoint) => println!("endpoint: {endpoint}"),
                None => println!("endpoint: (not configured)"),
            }
            println!("contacts: {}", contacts.len());
        }
    }
    Ok(())
}
