//! Waitlist collaborator interface
//!
//! The store itself is external (an insert-only table behind a REST
//! endpoint); this module owns the request shape, the email sanity check,
//! and the outcome mapping. A duplicate signup is a success, not an error.
use serde_json::{Map, Value};
use thiserror::Error;

/// Backend error code Postgres raises for a unique-key violation.
pub const DUPLICATE_KEY_CODE: &str = "23505";

pub const SOURCE_LANDING_PAGE: &str = "landing_page";

/// Insert request handed to a concrete store.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub source: String,
    pub metadata: Map<String, Value>,
}

impl SignupRequest {
    /// Build a validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if the email fails the syntax check.
    pub fn new(
        email: &str,
        source: &str,
        metadata: Map<String, Value>,
    ) -> Result<Self, WaitlistError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(WaitlistError::InvalidEmail);
        }
        Ok(Self {
            email: email.to_string(),
            source: source.to_string(),
            metadata,
        })
    }
}

/// Successful signup outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signup {
    Added,
    /// Duplicate key on insert: the visitor signed up earlier.
    AlreadyRegistered,
}

impl Signup {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Successfully added to waitlist!",
            Self::AlreadyRegistered => "You're already on our waitlist!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// Credentials missing; the collaborator degraded to a no-op.
    #[error("Service not available")]
    Unavailable,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("waitlist insert failed: {0}")]
    Backend(String),
}

/// Map a backend error code to an outcome: duplicates become success.
#[must_use]
pub fn map_backend_error(code: &str, message: &str) -> Result<Signup, WaitlistError> {
    if code == DUPLICATE_KEY_CODE {
        Ok(Signup::AlreadyRegistered)
    } else {
        Err(WaitlistError::Backend(format!("{code}: {message}")))
    }
}

/// Light syntax check; the store is the real arbiter.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}
