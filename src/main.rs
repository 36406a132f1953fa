mod calc;
mod cmd;
mod data;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locanda", about = "room reservation board")]
struct Cli {
    /// Path to the data directory containing the reservation and room files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with sample data files
    Init,
    /// Print the reservation board as text
    Show {
        /// Render the current week instead of the current month
        #[arg(long, conflicts_with = "from")]
        week: bool,
        /// Start date (dd/mm/yyyy) for a fixed period
        #[arg(long)]
        from: Option<String>,
        /// Number of days to render (with --from, or starting today)
        #[arg(long)]
        days: Option<u64>,
    },
    /// List all reservations
    Reservations,
    /// List room groups and rooms
    Rooms,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did
    // not explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty - running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Show { week, from, days }) => cmd::show::run(week, from.as_deref(), days),
        Some(Commands::Reservations) => cmd::reservations::run(),
        Some(Commands::Rooms) => cmd::rooms::run(),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
