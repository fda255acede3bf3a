use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use swordlink::{commands, diagnostics, error};

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "swordlink", version, about = "Analyze Sword and Bible-reader cross-reference links")]
struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze links given on the command line (exit 0/1)
    Analyze {
        /// Links to analyze, e.g. `sword://StrongsRealGreek/01909` or `Job.3.3`
        #[arg(required = true)]
        uris: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recognized link protocols
    Protocols,
    /// Scan documents for links and report unrecognized ones (exit 0/1/2)
    Scan {
        /// Directory to scan; `.swordlink.toml` is read from here
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Send `tracing` events to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| return "swordlink=warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the selected command and map its outcome to an exit code.
fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { uris, json } => commands::analyze(&uris, json),
        Commands::Protocols => Ok(commands::protocols()),
        Commands::Scan { path, json } => commands::scan(&path, json),
    };

    return result.unwrap_or_else(|e: error::Error| {
        diagnostics::print_error(&e);
        return ExitCode::from(2);
    });
}
