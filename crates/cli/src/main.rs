//! Meeple Market CLI - installer and database management tools.
//!
//! # Usage
//!
//! ```bash
//! # Provision the first administrator account interactively
//! mm-cli install setup
//!
//! # Provision the fixed default administrator account without prompts
//! mm-cli install setup --no-interaction
//!
//! # Run database migrations
//! mm-cli migrate
//! ```
//!
//! # Commands
//!
//! - `install setup` - First-run administrator account wizard
//! - `migrate` - Run database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "mm-cli")]
#[command(author, version, about = "Meeple Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run installation tasks
    Install {
        #[command(subcommand)]
        task: InstallTask,
    },
    /// Run database migrations
    Migrate,
}

#[derive(Subcommand)]
enum InstallTask {
    /// Create the first administrator account
    Setup {
        /// Skip prompts and use the fixed default credentials
        #[arg(long)]
        no_interaction: bool,
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
        Commands::Install { task } => match task {
            InstallTask::Setup { no_interaction } => {
                commands::install::setup(no_interaction).await?;
            }
        },
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
