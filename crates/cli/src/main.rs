//! Coupon Lab CLI - Seeding and fixture tools.
//!
//! # Usage
//!
//! ```bash
//! # Destructively re-seed the store from the built-in fixture
//! couponlab-cli seed
//!
//! # Seed from a key=value fixture file
//! couponlab-cli seed -f fixtures/demo.txt
//!
//! # Print the effective fixture without touching the store
//! couponlab-cli fixture show
//! ```
//!
//! # Environment Variables
//!
//! - `COUPONLAB_DATABASE_URL` - SQLite URL (overridden by `--database-url`)
//! - `COUPONLAB_FIXTURE_FILE` - fixture file path (overridden by `--file`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "couponlab-cli")]
#[command(author, version, about = "Coupon Lab CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop, recreate, and fill all store tables
    Seed {
        /// Fixture file (key=value lines); built-in defaults when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// SQLite database URL
        #[arg(long)]
        database_url: Option<String>,
    },
    /// Inspect fixtures
    Fixture {
        #[command(subcommand)]
        action: FixtureAction,
    },
}

#[derive(Subcommand)]
enum FixtureAction {
    /// Print the effective fixture values
    Show {
        /// Fixture file (key=value lines); built-in defaults when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { file, database_url } => {
            commands::seed::run(file, database_url).await?;
        }
        Commands::Fixture { action } => match action {
            FixtureAction::Show { file } => commands::fixture::show(file)?,
        },
    }
    Ok(())
}
