//! Plaintext password type.
//!
//! The installer collects a plaintext password from the operator before it
//! is hashed for storage. Wrapping it in [`secrecy::SecretString`] keeps it
//! out of `Debug` output and log lines.

use secrecy::{ExposeSecret, SecretString};

/// Errors that can occur when parsing a [`PlainPassword`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The input is empty or contains only whitespace.
    #[error("password cannot be blank")]
    Blank,
}

/// A non-blank plaintext password awaiting hashing.
///
/// Equality compares the exposed contents; this is what the installer's
/// confirmation re-entry check relies on.
#[derive(Debug, Clone)]
pub struct PlainPassword(SecretString);

impl PlainPassword {
    /// Parse a `PlainPassword` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::Blank`] if the input is empty or whitespace-only.
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        if s.trim().is_empty() {
            return Err(PasswordError::Blank);
        }

        Ok(Self(SecretString::from(s.to_owned())))
    }

    /// Expose the plaintext password.
    ///
    /// Callers should only do this at the hashing boundary.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl PartialEq for PlainPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PlainPassword {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let password = PlainPassword::parse("s3cret").unwrap();
        assert_eq!(password.expose(), "s3cret");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PlainPassword::parse(""), Err(PasswordError::Blank)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(
            PlainPassword::parse("   "),
            Err(PasswordError::Blank)
        ));
    }

    #[test]
    fn test_equality_compares_contents() {
        let a = PlainPassword::parse("match").unwrap();
        let b = PlainPassword::parse("match").unwrap();
        let c = PlainPassword::parse("other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = PlainPassword::parse("hunter2").unwrap();
        let debug = format!("{password:?}");
        assert!(!debug.contains("hunter2"));
    }
}
