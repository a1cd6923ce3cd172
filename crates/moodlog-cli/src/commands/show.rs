//! View recorded entries.

use clap::Args;

#[derive(Args)]
pub struct ShowArgs {
    /// Show only this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let journal = super::open_journal()?;

    match args.date {
        Some(date_key) => match journal.entry(&date_key) {
            Some(entry) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                } else {
                    println!("{date_key}  {} {}  {}", entry.mood.emoji(), entry.mood, entry.summary);
                }
            }
            None => println!("no entry for {date_key}"),
        },
        None => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(journal.entries())?);
            } else if journal.entries().is_empty() {
                println!("no entries recorded yet");
            } else {
                for (date_key, entry) in journal.entries().iter() {
                    println!("{date_key}  {} {}  {}", entry.mood.emoji(), entry.mood, entry.summary);
                }
            }
        }
    }
    Ok(())
}
