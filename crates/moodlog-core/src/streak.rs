//! Consecutive-bad-day streak detection.
//!
//! This module implements the trailing-window streak counter behind the
//! SOS trigger: walking backward from a reference date, how many days in
//! a row are explicitly marked "Bad"? A missing day or any other mood
//! breaks the streak immediately -- the scan never skips gaps.

use crate::entry::{parse_date_key, EntryLog, MoodLabel};
use crate::error::CoreError;

/// Trailing window the SOS policy inspects.
pub const SOS_WINDOW_DAYS: usize = 5;

/// Count consecutive "Bad" days ending at `end_date_key`, looking back at
/// most `window_size` days.
///
/// The cursor starts at `end_date_key` and moves one *calendar* day back
/// per step (`NaiveDate::pred_opt`), so month, year, and leap-day
/// boundaries are handled by the calendar rather than by subtracting a
/// fixed 24h offset. The count stops at the first missing entry or
/// non-"Bad" mood. Result is in `[0, window_size]`.
///
/// Pure with respect to the log: repeated calls with the same inputs
/// return the same count.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] if `end_date_key` is not a valid
/// `YYYY-MM-DD` calendar date. A malformed key is treated as caller
/// error, not as "no entry found".
pub fn count_consecutive_bad_days(
    entries: &EntryLog,
    end_date_key: &str,
    window_size: usize,
) -> Result<usize, CoreError> {
    if window_size == 0 {
        return Ok(0);
    }

    let mut cursor = parse_date_key(end_date_key)?;
    let mut count = 0;

    for _ in 0..window_size {
        let key = crate::entry::format_date_key(cursor);
        match entries.get(&key) {
            Some(entry) if entry.mood == MoodLabel::Bad => count += 1,
            _ => break,
        }
        cursor = match cursor.pred_opt() {
            Some(prev) => prev,
            // Ran off the start of the calendar; nothing earlier to scan.
            None => break,
        };
    }

    Ok(count)
}

/// [`count_consecutive_bad_days`] with the default SOS window.
pub fn sos_streak(entries: &EntryLog, end_date_key: &str) -> Result<usize, CoreError> {
    count_consecutive_bad_days(entries, end_date_key, SOS_WINDOW_DAYS)
}
