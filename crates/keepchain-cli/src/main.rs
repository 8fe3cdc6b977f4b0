use clap::{Parser, Subcommand};

mod commands;
mod common;
mod logging;

use common::Session;

#[derive(Parser)]
#[command(name = "keepchain", version, about = "Keep your promises. Keep the chain.")]
pub(crate) struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's status, chain, promises and logs
    Status,
    /// Streak grid for the last N days
    Grid {
        /// Number of days, 1-366 (defaults to streak.grid_days)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=366))]
        days: Option<u32>,
    },
    /// Daily promise management
    Promise {
        #[command(subcommand)]
        action: commands::promise::PromiseAction,
    },
    /// Close today as kept or broken
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Freeform notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Quick daily check boxes
    Quick(commands::note::QuickArgs),
    /// Expense ledger
    Money {
        #[command(subcommand)]
        action: commands::money::MoneyAction,
    },
    /// Calories and workout notes
    Body {
        #[command(subcommand)]
        action: commands::body::BodyAction,
    },
    /// Meditation log
    Mind(commands::body::MindArgs),
    /// Learning log
    Growth(commands::body::GrowthArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let session = Session::new(cli.json, cli.yes);
    let result = match cli.command {
        Commands::Status => commands::status::status(&session),
        Commands::Grid { days } => commands::status::grid(&session, days),
        Commands::Promise { action } => commands::promise::run(action, &session),
        Commands::Day { action } => commands::day::run(action, &session),
        Commands::Note { action } => commands::note::run(action, &session),
        Commands::Quick(args) => commands::note::quick(args, &session),
        Commands::Money { action } => commands::money::run(action, &session),
        Commands::Body { action } => commands::body::run(action, &session),
        Commands::Mind(args) => commands::body::mind(args, &session),
        Commands::Growth(args) => commands::body::growth(args, &session),
        Commands::Config { action } => commands::config::run(action, &session),
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
