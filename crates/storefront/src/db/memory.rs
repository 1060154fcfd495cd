//! In-memory administrator account repository.
//!
//! A first-class test double with the same conflict semantics as the
//! `PostgreSQL` implementation, used by the installer's unit tests and the
//! BDD suite.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use meeple_market_core::{AdminUserId, Email};

use super::{AdminUserRepository, RepositoryError};
use crate::models::{AdminUser, NewAdminUser};

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: Vec<StoredAdminUser>,
}

#[derive(Debug, Clone)]
struct StoredAdminUser {
    user: AdminUser,
    password_hash: String,
}

/// In-memory administrator account repository.
#[derive(Debug, Default)]
pub struct InMemoryAdminUserRepository {
    inner: Mutex<Inner>,
}

impl InMemoryAdminUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of persisted accounts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().rows.len()
    }

    /// Stored password hash for an account, if the account exists.
    #[must_use]
    pub fn password_hash_of(&self, email: &Email) -> Option<String> {
        self.lock()
            .rows
            .iter()
            .find(|stored| stored.user.email == *email)
            .map(|stored| stored.password_hash.clone())
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryAdminUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|stored| stored.user.email == *email)
            .map(|stored| stored.user.clone()))
    }

    async fn create(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        let mut inner = self.lock();

        if inner.rows.iter().any(|stored| stored.user.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email {} is already in use",
                user.email
            )));
        }

        inner.next_id += 1;
        let created = AdminUser {
            id: AdminUserId::new(inner.next_id),
            email: user.email,
            username: user.username,
            enabled: user.enabled,
            created_at: Utc::now(),
        };
        inner.rows.push(StoredAdminUser {
            user: created.clone(),
            password_hash: user.password_hash,
        });

        Ok(created)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewAdminUser {
        NewAdminUser {
            email: Email::parse(email).unwrap(),
            username: email.to_owned(),
            password_hash: "$argon2id$fake".to_owned(),
            enabled: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryAdminUserRepository::new();
        let email = Email::parse("admin@example.com").unwrap();

        assert!(repo.find_by_email(&email).await.unwrap().is_none());

        let created = repo.create(new_user("admin@example.com")).await.unwrap();
        assert!(created.enabled);
        assert_eq!(created.id, AdminUserId::new(1));

        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.email, email);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryAdminUserRepository::new();
        repo.create(new_user("admin@example.com")).await.unwrap();

        let err = repo.create(new_user("admin@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = InMemoryAdminUserRepository::new();
        let first = repo.create(new_user("a@example.com")).await.unwrap();
        let second = repo.create(new_user("b@example.com")).await.unwrap();
        assert_eq!(first.id, AdminUserId::new(1));
        assert_eq!(second.id, AdminUserId::new(2));
    }
}
