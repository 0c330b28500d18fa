mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "settle")]
#[command(version, about = "Arrears settlement analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full negotiation analysis for a request file
    Analyze {
        /// Path to the request file (YAML, TOML or JSON)
        input: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate a request file and list pendencies without computing
    Check {
        /// Path to the request file (YAML, TOML or JSON)
        input: String,
    },

    /// Print the shareable query-string form of a request
    Link {
        /// Path to the request file (YAML, TOML or JSON)
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Analyze { input, format } => commands::analyze::execute(&input, &format),

        Commands::Check { input } => commands::check::execute(&input),

        Commands::Link { input } => commands::link::execute(&input),
    }
}
