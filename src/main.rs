mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icsify")]
#[command(about = "Turn event details into a calendar file you can import")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an .ics file from a JSON list of events
    Generate {
        /// JSON file with events (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Timezone for every start/end time (e.g. "America/Los_Angeles")
        #[arg(short, long)]
        timezone: Option<String>,

        /// Where to write the calendar file (defaults to events.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the calendar file instead of writing it
        #[arg(long, conflicts_with = "output")]
        preview: bool,
    },
    /// Show the start and end a date + time expression resolves to
    Resolve {
        /// Date (YYYY-MM-DD, or e.g. "tomorrow", "next friday")
        date: String,

        /// Time ("09:00-10:00", "14:30", "morning", "evening", "tbd", "all day")
        time: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show configuration paths and settings
    Config {
        /// Save a default timezone to the config file
        #[arg(long)]
        set_timezone: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            timezone,
            output,
            preview,
        } => commands::generate::run(input, timezone, output, preview),
        Commands::Resolve { date, time, json } => commands::resolve::run(&date, &time, json),
        Commands::Config { set_timezone } => commands::config::run(set_timezone),
    }
}
