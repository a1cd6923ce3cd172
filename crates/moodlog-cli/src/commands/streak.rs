//! Evaluate the consecutive-bad-day streak without saving anything.

use clap::Args;
use moodlog_core::{entry::today_key, SOS_WINDOW_DAYS};

#[derive(Args)]
pub struct StreakArgs {
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date_key = args.date.unwrap_or_else(today_key);
    let journal = super::open_journal()?;
    let streak = journal.streak(&date_key)?;

    println!("Consecutive difficult days ending {date_key}: {streak}");
    if streak >= SOS_WINDOW_DAYS {
        println!("At the alert threshold: the next qualifying save will dispatch an SOS.");
    }
    Ok(())
}
