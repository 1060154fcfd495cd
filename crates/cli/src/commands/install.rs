//! First-run installer command.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: prompts for email and password on the terminal
//! mm-cli install setup
//!
//! # Non-interactive: uses admin@example.com / admin / admin
//! mm-cli install setup --no-interaction
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use thiserror::Error;

use meeple_market_storefront::config::{AppConfig, ConfigError};
use meeple_market_storefront::db::{self, PgAdminUserRepository};
use meeple_market_storefront::services::installer::{SetupError, SetupOutcome, SetupService};

use crate::console::TerminalConsole;

/// Errors that can occur during installation.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// The wizard itself failed.
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Run the administrator setup wizard.
///
/// An aborted run (the default account already exists in non-interactive
/// mode) is not an error; the command exits cleanly without persisting
/// anything.
///
/// # Errors
///
/// Returns an [`InstallError`] if configuration, the database connection,
/// or the wizard fails.
pub async fn setup(no_interaction: bool) -> Result<(), InstallError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;
    let repository = PgAdminUserRepository::new(pool);

    let service = SetupService::new(&repository);
    let mut console = TerminalConsole::new();

    match service.run(&mut console, !no_interaction).await? {
        SetupOutcome::Created(user) => {
            tracing::info!("Administrator account {} created", user.email);
        }
        SetupOutcome::Aborted => {
            tracing::warn!("Setup skipped: the administrator account already exists");
        }
    }

    Ok(())
}
