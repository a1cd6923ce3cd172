//! # Moodlog Core Library
//!
//! This library provides the core logic for Moodlog, a personal
//! mood-journaling tool. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Entry log**: an upsert-only map from ISO date key to the mood and
//!   summary recorded that day
//! - **Streak evaluator**: a pure trailing-window counter of consecutive
//!   "Bad" days, walking backward one calendar day at a time
//! - **SOS dispatcher**: best-effort webhook alert to up to three
//!   emergency contacts once a streak reaches five days
//! - **Storage**: JSON state files and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Journal`]: save flow tying the pieces together
//! - [`count_consecutive_bad_days`]: the streak counter
//! - [`SosDispatcher`]: alert delivery with explicit outcomes
//! - [`Config`]: application configuration management

pub mod entry;
pub mod error;
pub mod journal;
pub mod sos;
pub mod storage;
pub mod streak;

pub use entry::{EntryLog, MoodEntry, MoodLabel};
pub use error::{ConfigError, CoreError, StorageError};
pub use journal::{Journal, SaveOutcome};
pub use sos::{parse_contacts, DispatchOutcome, SkipReason, SosDispatcher, SosPayload};
pub use storage::{Config, EntryStore, JsonStore, MemoryStore, StoreState};
pub use streak::{count_consecutive_bad_days, sos_streak, SOS_WINDOW_DAYS};
