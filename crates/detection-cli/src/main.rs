//! Detection CLI - validate and canonicalize detection messages.

use clap::{Parser, Subcommand};
use detection_schemas::MessageKind;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, inspect, validate};

#[derive(Parser)]
#[command(name = "detection")]
#[command(about = "Seismic detection message validation CLI")]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. `debug`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a message and report conversion and validation errors
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Message kind: hypocenter, source or retract (detected if omitted)
        #[arg(long)]
        kind: Option<MessageKind>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the message is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Print the canonical JSON text of a message
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Message kind: hypocenter, source or retract (detected if omitted)
        #[arg(long)]
        kind: Option<MessageKind>,
    },
    /// Show which fields of a message are present
    Inspect {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Message kind: hypocenter, source or retract (detected if omitted)
        #[arg(long)]
        kind: Option<MessageKind>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Validate {
            input,
            kind,
            json,
            strict,
        } => validate::run(input, kind, json, strict),
        Commands::Canonicalize { input, kind } => canonicalize::run(input, kind),
        Commands::Inspect { input, kind } => inspect::run(input, kind),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
