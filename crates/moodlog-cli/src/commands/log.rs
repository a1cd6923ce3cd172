//! Record a mood entry and report the resulting streak.

use clap::Args;
use moodlog_core::{entry::today_key, DispatchOutcome, MoodLabel, SOS_WINDOW_DAYS};

#[derive(Args)]
pub struct LogArgs {
    /// Mood label: fantastic, good, average, bad
    mood: String,

    /// Date to record (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Free-text daily summary
    #[arg(long, default_value = "")]
    summary: String,
}

pub fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mood: MoodLabel = args.mood.parse()?;
    let date_key = args.date.unwrap_or_else(today_key);

    let mut journal = super::open_journal()?;
    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(journal.save_entry(&date_key, mood, args.summary))?;

    println!("{} {} recorded for {date_key}", mood.emoji(), mood);
    if outcome.streak > 0 {
        println!(
            "Consecutive difficult days: {} (alert at {})",
            outcome.streak, SOS_WINDOW_DAYS
        );
    }
    match outcome.dispatch {
        Some(DispatchOutcome::Sent) => println!("SOS alert sent to your contacts."),
        Some(DispatchOutcome::Skipped { reason }) => {
            println!("SOS alert skipped: {}", serde_json::to_string(&reason)?);
        }
        Some(DispatchOutcome::Failed { reason }) => {
            println!("SOS alert could not be delivered: {reason}");
        }
        None => {}
    }
    Ok(())
}
