use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "moodlog-cli", version, about = "Moodlog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a mood entry for a date
    Log(commands::log::LogArgs),
    /// View recorded entries
    Show(commands::show::ShowArgs),
    /// Evaluate the consecutive-bad-day streak without saving
    Streak(commands::streak::StreakArgs),
    /// Emergency contacts management
    Contacts {
        #[command(subcommand)]
        action: commands::contacts::ContactsAction,
    },
    /// SOS alert dispatch
    Sos {
        #[command(subcommand)]
        action: commands::sos::SosAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log(args) => commands::log::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Contacts { action } => commands::contacts::run(action),
        Commands::Sos { action } => commands::sos::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
