mod commands;
mod forms;
mod grid;
mod month;

use anyhow::Result;
use clap::{Parser, Subcommand};

use month::Month;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Plan your days on a month calendar")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive planning session (the default)
    Plan {
        /// Month to open (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Render the month grid once and exit
    Show {
        /// Month to render (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show or change settings
    Config {
        /// Start each run with the two sample entries
        #[arg(long)]
        seed_samples: Option<bool>,

        /// Allow moving entries to other days
        #[arg(long)]
        drag_edit: Option<bool>,

        /// First day of the week in the grid ("sunday" or "monday")
        #[arg(long)]
        first_weekday: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Plan { month: None }) {
        Commands::Plan { month } => commands::plan::run(resolve_month(month.as_deref())?),
        Commands::Show { month } => commands::show::run(resolve_month(month.as_deref())?),
        Commands::Config {
            seed_samples,
            drag_edit,
            first_weekday,
        } => commands::config::run(seed_samples, drag_edit, first_weekday),
    }
}

fn resolve_month(arg: Option<&str>) -> Result<Month> {
    match arg {
        Some(s) => Month::parse(s),
        None => Ok(Month::containing(chrono::Local::now().date_naive())),
    }
}
