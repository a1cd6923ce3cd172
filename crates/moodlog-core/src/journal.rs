//! Journal save flow -- the integration point between the entry log,
//! the streak evaluator, and the SOS dispatcher.
//!
//! Each date key moves Unset -> Recorded on save (overwrites allowed,
//! last write wins). Every save recomputes the streak ending at the saved
//! date and, at five or more consecutive "Bad" days, attempts one
//! dispatch. There is deliberately no "already alerted" tracking: a
//! qualifying overwrite re-triggers the alert. Dispatch failure never
//! fails the save.

use serde::{Deserialize, Serialize};

use crate::entry::{EntryLog, MoodEntry, MoodLabel};
use crate::error::Result;
use crate::sos::{DispatchOutcome, SosDispatcher};
use crate::storage::EntryStore;
use crate::streak::{sos_streak, SOS_WINDOW_DAYS};

/// Result of saving an entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Consecutive "Bad" days ending at the saved date, in `[0, 5]`.
    pub streak: usize,
    /// Dispatch outcome when the streak reached the SOS window;
    /// `None` when no dispatch was attempted.
    pub dispatch: Option<DispatchOutcome>,
}

/// The mood journal: loaded state plus its persistence and alerting
/// collaborators.
pub struct Journal<S: EntryStore> {
    store: S,
    dispatcher: SosDispatcher,
    entries: EntryLog,
    contacts_raw: String,
}

impl<S: EntryStore> Journal<S> {
    /// Load persisted state from the store.
    pub fn open(store: S, dispatcher: SosDispatcher) -> Result<Self> {
        let state = store.load()?;
        Ok(Self {
            store,
            dispatcher,
            entries: state.entries,
            contacts_raw: state.contacts_raw,
        })
    }

    /// Read-only view of the entry log.
    pub fn entries(&self) -> &EntryLog {
        &self.entries
    }

    /// Entry recorded for a date key, if any.
    pub fn entry(&self, date_key: &str) -> Option<&MoodEntry> {
        self.entries.get(date_key)
    }

    /// The raw contacts string as configured (unparsed).
    pub fn contacts_raw(&self) -> &str {
        &self.contacts_raw
    }

    /// Replace and persist the raw contacts string.
    pub fn set_contacts(&mut self, raw: impl Into<String>) -> Result<()> {
        self.contacts_raw = raw.into();
        self.store.save_contacts(&self.contacts_raw)?;
        Ok(())
    }

    /// Streak of consecutive "Bad" days ending at `date_key`.
    pub fn streak(&self, date_key: &str) -> Result<usize> {
        sos_streak(&self.entries, date_key)
    }

    /// Record (or overwrite) the entry for `date_key`, persist the log,
    /// then evaluate the streak and fire one best-effort SOS dispatch if
    /// it reached the window.
    ///
    /// The log snapshot and date key used for evaluation are captured
    /// before the dispatch await point, so an in-flight dispatch observes
    /// the state as of this save.
    pub async fn save_entry(
        &mut self,
        date_key: &str,
        mood: MoodLabel,
        summary: impl Into<String>,
    ) -> Result<SaveOutcome> {
        // Validate the key up front so a bad date never lands in the log.
        crate::entry::parse_date_key(date_key)?;

        self.entries
            .upsert(date_key, MoodEntry::new(mood, summary));
        self.store.save_entries(&self.entries)?;

        let streak = sos_streak(&self.entries, date_key)?;
        let dispatch = if streak >= SOS_WINDOW_DAYS {
            Some(
                self.dispatcher
                    .trigger_if_configured(&self.contacts_raw)
                    .await,
            )
        } else {
            None
        };

        Ok(SaveOutcome { streak, dispatch })
    }

    /// Manual "test send": one dispatch attempt with the current contacts.
    pub async fn test_dispatch(&self) -> DispatchOutcome {
        self.dispatcher.trigger_if_configured(&self.contacts_raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn journal_without_endpoint() -> Journal<MemoryStore> {
        Journal::open(MemoryStore::new(), SosDispatcher::new(None)).unwrap()
    }

    #[tokio::test]
    async fn save_persists_entry() {
        let mut journal = journal_without_endpoint();
        journal
            .save_entry("2025-01-05", MoodLabel::Good, "fine")
            .await
            .unwrap();

        assert_eq!(journal.entry("2025-01-05").unwrap().mood, MoodLabel::Good);
    }

    #[tokio::test]
    async fn save_reports_streak_below_window_without_dispatch() {
        let mut journal = journal_without_endpoint();
        journal.set_contacts("+1").unwrap();

        for day in ["2025-01-03", "2025-01-04"] {
            journal.save_entry(day, MoodLabel::Bad, "").await.unwrap();
        }
        let outcome = journal
            .save_entry("2025-01-05", MoodLabel::Bad, "")
            .await
            .unwrap();

        assert_eq!(outcome.streak, 3);
        assert!(outcome.dispatch.is_none());
    }

    #[tokio::test]
    async fn fifth_bad_day_attempts_dispatch() {
        let mut journal = journal_without_endpoint();
        journal.set_contacts("+1,+2").unwrap();

        for day in ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04"] {
            journal.save_entry(day, MoodLabel::Bad, "").await.unwrap();
        }
        let outcome = journal
            .save_entry("2025-01-05", MoodLabel::Bad, "")
            .await
            .unwrap();

        assert_eq!(outcome.streak, 5);
        // No endpoint configured, so the attempt is a skip -- but it was made.
        assert_eq!(
            outcome.dispatch,
            Some(DispatchOutcome::Skipped {
                reason: crate::sos::SkipReason::NoEndpoint
            })
        );
    }

    #[tokio::test]
    async fn qualifying_overwrite_retriggers_dispatch() {
        let mut journal = journal_without_endpoint();

        for day in [
            "2025-01-01",
            "2025-01-02",
            "2025-01-03",
            "2025-01-04",
            "2025-01-05",
        ] {
            journal.save_entry(day, MoodLabel::Bad, "").await.unwrap();
        }
        // Overwrite the last day; streak still qualifies, dispatch re-attempted.
        let outcome = journal
            .save_entry("2025-01-05", MoodLabel::Bad, "still rough")
            .await
            .unwrap();

        assert_eq!(outcome.streak, 5);
        assert!(outcome.dispatch.is_some());
    }

    #[tokio::test]
    async fn dispatch_failure_does_not_fail_the_save() {
        let store = MemoryStore::new();
        store.save_contacts("+1").unwrap();
        let dispatcher = SosDispatcher::new(Some("http://127.0.0.1:1/sos".into()));
        let mut journal = Journal::open(store, dispatcher).unwrap();

        for day in ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04"] {
            journal.save_entry(day, MoodLabel::Bad, "").await.unwrap();
        }
        let outcome = journal
            .save_entry("2025-01-05", MoodLabel::Bad, "")
            .await
            .unwrap();

        assert!(matches!(
            outcome.dispatch,
            Some(DispatchOutcome::Failed { .. })
        ));
        // Entry still persisted.
        assert!(journal.entry("2025-01-05").is_some());
    }

    #[tokio::test]
    async fn save_rejects_malformed_date_key() {
        let mut journal = journal_without_endpoint();
        let err = journal
            .save_entry("Jan 5 2025", MoodLabel::Bad, "")
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::CoreError::InvalidDate { .. }));
        assert!(journal.entries().is_empty());
    }

    #[tokio::test]
    async fn contacts_roundtrip_through_store() {
        let mut journal = journal_without_endpoint();
        journal.set_contacts(" +1, +2 ").unwrap();

        assert_eq!(journal.contacts_raw(), " +1, +2 ");
        assert_eq!(journal.store.state().contacts_raw, " +1, +2 ");
    }
}
