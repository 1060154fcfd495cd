//! Administrator account repository.
//!
//! Queries are built at runtime with `sqlx::query_as` and `.bind()` so the
//! workspace compiles without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use meeple_market_core::{AdminUserId, Email};

use super::RepositoryError;
use crate::models::{AdminUser, NewAdminUser};

/// Lookup and persistence operations for administrator accounts.
///
/// The installer only ever needs these two operations: a uniqueness probe
/// by email and a single-shot create that commits the whole account.
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Find an administrator account by email address.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the query fails.
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError>;

    /// Persist a new administrator account as a single unit.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the email already exists.
    /// Returns [`RepositoryError::Database`] for other database errors.
    async fn create(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError>;
}

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` admin user queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: i32,
    email: String,
    username: String,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminUserId::new(row.id),
            email,
            username: row.username,
            enabled: row.enabled,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// `PostgreSQL`-backed administrator account repository.
#[derive(Debug, Clone)]
pub struct PgAdminUserRepository {
    pool: PgPool,
}

impl PgAdminUserRepository {
    /// Create a new administrator account repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminUserRepository for PgAdminUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, email, username, enabled, created_at
            FROM admin_user
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminUser::try_from).transpose()
    }

    async fn create(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            INSERT INTO admin_user (email, username, password_hash, enabled)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, enabled, created_at
            ",
        )
        .bind(user.email.as_str())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict(format!("email {} is already in use", user.email))
            }
            other => RepositoryError::Database(other),
        })?;

        AdminUser::try_from(row)
    }
}
