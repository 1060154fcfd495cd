//! Named constraints and violation descriptors.
//!
//! The installer wizard validates operator input against a small set of
//! named constraints. Validation is a pure function from a value and a
//! constraint list to zero or more [`ConstraintViolation`]s; callers decide
//! whether to re-prompt or abort.

use core::fmt;

use crate::types::Email;

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must not be empty or whitespace-only.
    NotBlank,
    /// The value must parse as an email address.
    EmailShaped,
}

impl Constraint {
    fn check(self, value: &str) -> Option<ConstraintViolation> {
        let message = match self {
            Self::NotBlank => {
                if value.trim().is_empty() {
                    "This value should not be blank.".to_owned()
                } else {
                    return None;
                }
            }
            Self::EmailShaped => match Email::parse(value) {
                Ok(_) => return None,
                Err(e) => format!("This value is not a valid email address ({e})."),
            },
        };

        Some(ConstraintViolation {
            constraint: self,
            message,
        })
    }
}

/// A failed constraint with its operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// The constraint that was violated.
    pub constraint: Constraint,
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validate a value against a set of named constraints.
///
/// Returns one violation per failed constraint, in constraint order. An
/// empty list means the value is valid.
#[must_use]
pub fn validate(value: &str, constraints: &[Constraint]) -> Vec<ConstraintViolation> {
    constraints
        .iter()
        .filter_map(|constraint| constraint.check(value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_has_no_violations() {
        let violations = validate(
            "admin@example.com",
            &[Constraint::EmailShaped, Constraint::NotBlank],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_malformed_email_violates_email_shaped() {
        let violations = validate(
            "not-an-email",
            &[Constraint::EmailShaped, Constraint::NotBlank],
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.first().map(|v| v.constraint),
            Some(Constraint::EmailShaped)
        );
    }

    #[test]
    fn test_blank_value_violates_both() {
        let violations = validate("", &[Constraint::EmailShaped, Constraint::NotBlank]);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_whitespace_is_blank() {
        let violations = validate("  ", &[Constraint::NotBlank]);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_non_blank_password_passes() {
        assert!(validate("s3cret", &[Constraint::NotBlank]).is_empty());
    }
}
