//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose structural check: something before and after the `@`, a dot in the
/// domain, no whitespace.
static LOOSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Strict check applied on top of the loose one for contact and submission
/// forms: restricted character set and an alphabetic TLD of 2+ characters.
static STRICT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// Errors that can occur when parsing an [`Email`].
///
/// The display strings are surfaced verbatim to form submitters, so they are
/// phrased as user-facing messages rather than developer diagnostics.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// The input is missing or empty after trimming.
    #[error("Email is required")]
    Empty,
    /// The input is longer than 254 characters (RFC 5321 limit).
    #[error("Email must be less than 254 characters")]
    TooLong,
    /// The input fails the loose structural pattern.
    #[error("Invalid email format")]
    Invalid,
    /// The input passes the loose pattern but fails the strict one.
    #[error("Please enter a valid email address")]
    Rejected,
}

/// A validated, normalized email address.
///
/// Stored trimmed and lowercased. Two levels of validation exist because the
/// order-creation path only ever applied the loose pattern while the contact
/// and submission forms apply both; that asymmetry is deliberate observed
/// behavior and must not be "fixed" silently.
///
/// ## Examples
///
/// ```
/// use badinvstmnt_core::Email;
///
/// let email = Email::parse("  User@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
///
/// // Passes the loose check but not the strict one (underscore domain).
/// assert!(Email::parse("user@ex_ample.com").is_err());
/// assert!(Email::parse_loose("user@ex_ample.com").is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` with both the loose and strict patterns.
    ///
    /// The input is trimmed before validation and lowercased for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 254 characters,
    /// or fails either pattern. Checks run in that order and stop at the
    /// first failure.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        // Character count, not bytes: the cap predates any charset rule,
        // so non-ASCII input can reach it.
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if !LOOSE_PATTERN.is_match(trimmed) {
            return Err(EmailError::Invalid);
        }
        if !STRICT_PATTERN.is_match(trimmed) {
            return Err(EmailError::Rejected);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Parse an `Email` with only the loose structural pattern.
    ///
    /// Used by the order path, which never applied the strict pattern or the
    /// length cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming or fails the
    /// loose pattern.
    pub fn parse_loose(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if !LOOSE_PATTERN.is_match(trimmed) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Check a raw string against the loose pattern without trimming.
    ///
    /// The newsletter signup validates the submitted string exactly as
    /// received (trimming happens only at storage time), so surrounding
    /// whitespace is a rejection there.
    #[must_use]
    pub fn matches_loose(s: &str) -> bool {
        LOOSE_PATTERN.is_match(s)
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
