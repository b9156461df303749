//! Authentication module - client-side credential validation
//!
//! Registration runs this validation gate locally; nothing reaches the
//! network until every rule passes.

use crate::error::{Error, Result};

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-rule evaluation of a candidate password, mirrored by the CLI so the
/// user can see which rules failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
}

impl PasswordCheck {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_lowercase && self.has_digit
    }

    /// Names of the rules that failed, for display.
    pub fn failed_rules(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.has_min_length {
            failed.push("at least 8 characters");
        }
        if !self.has_uppercase {
            failed.push("at least one uppercase letter");
        }
        if !self.has_lowercase {
            failed.push("at least one lowercase letter");
        }
        if !self.has_digit {
            failed.push("at least one number");
        }
        failed
    }
}

/// Validate a registration form. Checks the username, the password rules and
/// the confirmation match, in that order.
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::validation("username is required"));
    }
    let check = PasswordCheck::evaluate(password);
    if !check.is_valid() {
        return Err(Error::validation(format!(
            "password does not meet the requirements: {}",
            check.failed_rules().join(", ")
        )));
    }
    if password != confirm {
        return Err(Error::validation("passwords do not match"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Password Rule Tests
    // ========================================================================

    #[test]
    fn test_missing_uppercase_fails() {
        let check = PasswordCheck::evaluate("abc12345");
        assert!(!check.is_valid());
        assert!(!check.has_uppercase);
        assert!(check.has_min_length);
        assert!(check.has_lowercase);
        assert!(check.has_digit);
    }

    #[test]
    fn test_missing_lowercase_and_digit_fails() {
        let check = PasswordCheck::evaluate("ABCDEFGH");
        assert!(!check.is_valid());
        assert!(!check.has_lowercase);
        assert!(!check.has_digit);
    }

    #[test]
    fn test_all_rules_pass() {
        let check = PasswordCheck::evaluate("Abcdef12");
        assert!(check.is_valid());
        assert!(check.failed_rules().is_empty());
    }

    #[test]
    fn test_too_short_fails() {
        let check = PasswordCheck::evaluate("Ab1");
        assert!(!check.is_valid());
        assert_eq!(check.failed_rules(), vec!["at least 8 characters"]);
    }

    #[test]
    fn test_failed_rules_list_everything() {
        let check = PasswordCheck::evaluate("");
        assert_eq!(check.failed_rules().len(), 4);
    }

    // ========================================================================
    // Registration Validation Tests
    // ========================================================================

    #[test]
    fn test_registration_rejects_empty_username() {
        let err = validate_registration("  ", "Abcdef12", "Abcdef12").unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_registration_rejects_weak_password() {
        let err = validate_registration("alice", "abc12345", "abc12345").unwrap_err();
        assert!(err.to_string().contains("uppercase"));
    }

    #[test]
    fn test_registration_rejects_mismatched_confirmation() {
        let err = validate_registration("alice", "Abcdef12", "Abcdef13").unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_registration_accepts_valid_input() {
        assert!(validate_registration("alice", "Passw0rd", "Passw0rd").is_ok());
    }
}
