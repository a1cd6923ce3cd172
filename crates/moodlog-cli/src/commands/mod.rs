pub mod config;
pub mod contacts;
pub mod log;
pub mod show;
pub mod sos;
pub mod streak;

use moodlog_core::{Config, Journal, JsonStore, SosDispatcher};

/// Open the journal backed by the default store and the configured
/// SOS endpoint.
pub(crate) fn open_journal() -> Result<Journal<JsonStore>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = JsonStore::open()?;
    let dispatcher = SosDispatcher::new(config.sos_endpoint());
    Ok(Journal::open(store, dispatcher)?)
}
