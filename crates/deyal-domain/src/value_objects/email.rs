//! Email value object and syntax checking.

use deyal_core::{DeyalError, Interface};
use serde::{Deserialize, Serialize};
use shaku::Component;
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Error type for email validation.
#[derive(Debug, Error)]
#[error("Invalid email address: {0}")]
pub struct EmailError(String);

impl From<EmailError> for DeyalError {
    fn from(err: EmailError) -> Self {
        Self::InvalidEmail(err.0)
    }
}

/// Returns true when `email` is a syntactically valid address.
///
/// Surrounding whitespace is ignored. No DNS or mailbox checks are made.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.trim().to_string().validate_email()
}

/// Interface for email syntax checking.
pub trait EmailSyntaxChecker: Interface + Send + Sync {
    /// Returns true when the string is a syntactically valid email address.
    fn is_valid(&self, email: &str) -> bool;
}

/// Email syntax checker backed by the `validator` crate's rules.
#[derive(Component, Clone, Copy, Debug, Default)]
#[shaku(interface = EmailSyntaxChecker)]
pub struct ValidatorEmailChecker {}

impl ValidatorEmailChecker {
    /// Creates a new checker.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl EmailSyntaxChecker for ValidatorEmailChecker {
    fn is_valid(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

/// Email value object with validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email after validating the format.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_lowercase();

        if !email.validate_email() {
            return Err(EmailError(email));
        }

        Ok(Self(email))
    }

    /// Creates a new Email without validation (for trusted sources).
    ///
    /// Only use this for data that was validated before it was stored.
    #[must_use]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into().trim().to_lowercase())
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when `other` names the same mailbox, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
