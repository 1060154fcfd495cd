//! First-run installer service.
//!
//! Provisions the first administrator account, either from fixed defaults
//! (non-interactive mode) or by prompting the operator for an email and a
//! password.
//!
//! Prompt retry policy, as shipped by the original installer and kept
//! deliberately: format validation is capped at three attempts per prompt,
//! while the email-uniqueness check and the password-confirmation check
//! retry without a cap.

mod console;
mod error;

pub use console::{Console, ConsoleError, ScriptedConsole};
pub use error::SetupError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use meeple_market_core::{Constraint, Email, PlainPassword, validate};

use crate::db::AdminUserRepository;
use crate::models::{AdminUser, NewAdminUser};

/// Email of the default administrator account used in non-interactive mode.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Username of the default administrator account.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the default administrator account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Maximum rejected answers per prompt before the wizard gives up.
const MAX_PROMPT_ATTEMPTS: u32 = 3;

const EMAIL_PROMPT: &str = "E-mail:";
const PASSWORD_PROMPT: &str = "Choose password:";
const CONFIRM_PROMPT: &str = "Confirm password:";

/// How a wizard run ended.
#[derive(Debug)]
pub enum SetupOutcome {
    /// An account was persisted.
    Created(AdminUser),
    /// Nothing was persisted; the run ended early but not in error. In
    /// non-interactive mode this means the default account already exists.
    Aborted,
}

/// Everything collected before persistence.
#[derive(Debug)]
struct AccountDraft {
    email: Email,
    username: String,
    password: PlainPassword,
}

/// The setup wizard.
pub struct SetupService<'a, R: AdminUserRepository> {
    repository: &'a R,
}

impl<'a, R: AdminUserRepository> SetupService<'a, R> {
    /// Create a wizard over the given account repository.
    #[must_use]
    pub const fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Run the wizard to completion.
    ///
    /// The account is constructed fully in memory and persisted as one
    /// `create` call; no partial account ever reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MaxAttempts`] when a prompt's attempt budget
    /// is exhausted, [`SetupError::Console`] when operator input fails, and
    /// [`SetupError::Repository`] when persistence fails.
    pub async fn run<C: Console>(
        &self,
        console: &mut C,
        interactive: bool,
    ) -> Result<SetupOutcome, SetupError> {
        console.writeln("Create your administrator account.");

        let draft = if interactive {
            self.configure_interactively(console).await?
        } else {
            match self.default_draft().await? {
                Some(draft) => draft,
                None => return Ok(SetupOutcome::Aborted),
            }
        };

        let password_hash = hash_password(draft.password.expose())?;
        let user = self
            .repository
            .create(NewAdminUser {
                email: draft.email,
                username: draft.username,
                password_hash,
                enabled: true,
            })
            .await?;

        tracing::debug!(email = %user.email, "administrator account persisted");
        console.writeln("Administrator account successfully registered.");
        Ok(SetupOutcome::Created(user))
    }

    /// Build the fixed default account, or `None` if it already exists.
    async fn default_draft(&self) -> Result<Option<AccountDraft>, SetupError> {
        let email = Email::parse(DEFAULT_ADMIN_EMAIL)
            .map_err(|e| SetupError::Internal(format!("default admin email invalid: {e}")))?;

        if self.repository.find_by_email(&email).await?.is_some() {
            return Ok(None);
        }

        let password = PlainPassword::parse(DEFAULT_ADMIN_PASSWORD)
            .map_err(|e| SetupError::Internal(format!("default admin password invalid: {e}")))?;

        Ok(Some(AccountDraft {
            email,
            username: DEFAULT_ADMIN_USERNAME.to_owned(),
            password,
        }))
    }

    /// Collect email and password from the operator.
    async fn configure_interactively<C: Console>(
        &self,
        console: &mut C,
    ) -> Result<AccountDraft, SetupError> {
        let email = loop {
            // Each pass through the uniqueness loop re-asks the question
            // with a fresh attempt budget; only format failures are capped.
            let candidate = ask_email(console)?;

            if self.repository.find_by_email(&candidate).await?.is_some() {
                console.writeln("E-Mail is already in use!");
            } else {
                break candidate;
            }
        };

        let password = ask_password_pair(console)?;

        Ok(AccountDraft {
            username: email.to_string(),
            email,
            password,
        })
    }
}

/// Ask for an email address, re-prompting on violations.
fn ask_email<C: Console>(console: &mut C) -> Result<Email, SetupError> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        let raw = console.ask(EMAIL_PROMPT)?;
        let violations = validate(&raw, &[Constraint::EmailShaped, Constraint::NotBlank]);

        match Email::parse(&raw) {
            Ok(email) if violations.is_empty() => return Ok(email),
            _ => {
                for violation in &violations {
                    console.writeln(&violation.to_string());
                }
            }
        }
    }

    Err(SetupError::MaxAttempts {
        prompt: EMAIL_PROMPT.to_owned(),
        attempts: MAX_PROMPT_ATTEMPTS,
    })
}

/// Ask for a password and its confirmation until they match.
fn ask_password_pair<C: Console>(console: &mut C) -> Result<PlainPassword, SetupError> {
    loop {
        let password = ask_password(console, PASSWORD_PROMPT)?;
        let confirmation = ask_password(console, CONFIRM_PROMPT)?;

        if password == confirmation {
            return Ok(password);
        }

        console.writeln("Passwords do not match!");
    }
}

/// Ask for one masked, non-blank value.
fn ask_password<C: Console>(console: &mut C, prompt: &str) -> Result<PlainPassword, SetupError> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        let raw = console.ask_hidden(prompt)?;
        let violations = validate(&raw, &[Constraint::NotBlank]);

        match PlainPassword::parse(&raw) {
            Ok(password) if violations.is_empty() => return Ok(password),
            _ => {
                for violation in &violations {
                    console.writeln(&violation.to_string());
                }
            }
        }
    }

    Err(SetupError::MaxAttempts {
        prompt: prompt.to_owned(),
        attempts: MAX_PROMPT_ATTEMPTS,
    })
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, SetupError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| SetupError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), SetupError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| SetupError::PasswordHash)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| SetupError::PasswordHash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::InMemoryAdminUserRepository;

    fn default_email() -> Email {
        Email::parse(DEFAULT_ADMIN_EMAIL).unwrap()
    }

    async fn seed_account(repo: &InMemoryAdminUserRepository, email: &str) {
        repo.create(NewAdminUser {
            email: Email::parse(email).unwrap(),
            username: email.to_owned(),
            password_hash: hash_password("pre-existing").unwrap(),
            enabled: true,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn non_interactive_creates_default_admin() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console = ScriptedConsole::default();

        let outcome = SetupService::new(&repo)
            .run(&mut console, false)
            .await
            .unwrap();

        let user = match outcome {
            SetupOutcome::Created(user) => user,
            SetupOutcome::Aborted => panic!("expected an account to be created"),
        };
        assert_eq!(user.email, default_email());
        assert_eq!(user.username, DEFAULT_ADMIN_USERNAME);
        assert!(user.enabled);
        assert_eq!(repo.count(), 1);

        let hash = repo.password_hash_of(&default_email()).unwrap();
        assert_ne!(hash, DEFAULT_ADMIN_PASSWORD);
        verify_password(DEFAULT_ADMIN_PASSWORD, &hash).unwrap();

        assert_eq!(
            console.count_line("Administrator account successfully registered."),
            1
        );
    }

    #[tokio::test]
    async fn non_interactive_aborts_when_default_account_exists() {
        let repo = InMemoryAdminUserRepository::new();
        seed_account(&repo, DEFAULT_ADMIN_EMAIL).await;
        let mut console = ScriptedConsole::default();

        let outcome = SetupService::new(&repo)
            .run(&mut console, false)
            .await
            .unwrap();

        assert!(matches!(outcome, SetupOutcome::Aborted));
        assert_eq!(repo.count(), 1);
        assert_eq!(
            console.count_line("Administrator account successfully registered."),
            0
        );
    }

    #[tokio::test]
    async fn interactive_creates_account_from_answers() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console =
            ScriptedConsole::with_answers(["loic@meeple.market", "s3cret", "s3cret"]);

        let outcome = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap();

        assert!(matches!(outcome, SetupOutcome::Created(_)));
        let email = Email::parse("loic@meeple.market").unwrap();
        let user = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(user.username, "loic@meeple.market");
        assert!(user.enabled);

        let hash = repo.password_hash_of(&email).unwrap();
        verify_password("s3cret", &hash).unwrap();
    }

    #[tokio::test]
    async fn malformed_email_reprompts_then_fails_after_three_attempts() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console =
            ScriptedConsole::with_answers(["not-an-email", "still-not-an-email", "nope"]);

        let err = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SetupError::MaxAttempts { attempts: 3, .. }
        ));
        assert_eq!(repo.count(), 0);
        assert_eq!(console.count_line(EMAIL_PROMPT), 3);
    }

    #[tokio::test]
    async fn malformed_email_then_valid_one_succeeds() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console = ScriptedConsole::with_answers([
            "not-an-email",
            "loic@meeple.market",
            "s3cret",
            "s3cret",
        ]);

        let outcome = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap();

        assert!(matches!(outcome, SetupOutcome::Created(_)));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn taken_email_is_retried_without_an_attempt_cap() {
        // The uniqueness branch deliberately has no cap, unlike format
        // validation; four conflicts in a row must still recover.
        let repo = InMemoryAdminUserRepository::new();
        seed_account(&repo, "taken@meeple.market").await;

        let mut console = ScriptedConsole::with_answers([
            "taken@meeple.market",
            "taken@meeple.market",
            "taken@meeple.market",
            "taken@meeple.market",
            "fresh@meeple.market",
            "s3cret",
            "s3cret",
        ]);

        let outcome = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap();

        assert!(matches!(outcome, SetupOutcome::Created(_)));
        assert_eq!(console.count_line("E-Mail is already in use!"), 4);
        assert_eq!(repo.count(), 2);
    }

    #[tokio::test]
    async fn mismatched_passwords_reprompt_until_they_match() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console = ScriptedConsole::with_answers([
            "loic@meeple.market",
            "first-try",
            "fisrt-try",
            "second-try",
            "second-try",
        ]);

        let outcome = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap();

        assert!(matches!(outcome, SetupOutcome::Created(_)));
        assert_eq!(console.count_line("Passwords do not match!"), 1);

        let email = Email::parse("loic@meeple.market").unwrap();
        let hash = repo.password_hash_of(&email).unwrap();
        verify_password("second-try", &hash).unwrap();
        assert!(verify_password("first-try", &hash).is_err());
    }

    #[tokio::test]
    async fn blank_passwords_exhaust_the_attempt_budget() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console = ScriptedConsole::with_answers(["loic@meeple.market", "", " ", ""]);

        let err = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::MaxAttempts { .. }));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn exhausted_input_never_persists_a_partial_account() {
        let repo = InMemoryAdminUserRepository::new();
        let mut console = ScriptedConsole::with_answers(["loic@meeple.market", "s3cret"]);

        let err = SetupService::new(&repo)
            .run(&mut console, true)
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::Console(ConsoleError::Closed)));
        assert_eq!(repo.count(), 0);
    }
}
