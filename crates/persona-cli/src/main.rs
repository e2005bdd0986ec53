//! persona CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "persona",
    version,
    about = "Multi-instrument personality questionnaire scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an answer file
    Analyze {
        /// JSON file mapping question ids to answers (1-5)
        #[arg(long)]
        answers: PathBuf,

        /// Question bank TOML (default: the built-in standard bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fail if any question is unanswered
        #[arg(long)]
        strict: bool,
    },

    /// Validate a question bank
    Validate {
        /// Question bank TOML (default: the built-in standard bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Write the standard question bank and a neutral answer file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("persona=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            answers,
            bank,
            format,
            output,
            strict,
        } => commands::analyze::execute(answers, bank, format, output, strict),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
