//! Breach lookups feeding the scoring engine.
//!
//! The email check is simulated and cannot fail. The password check queries a
//! hash-prefix range API so neither the password nor its full hash leaves the
//! process.

mod email;
mod password;

pub use email::{SimulatedEmailCheck, DEFAULT_EMAIL_CHECK_DELAY};
pub use password::{
    hash_password, parse_range_response, PasswordHash, PwnedPasswordsClient, DEFAULT_RANGE_API,
    PREFIX_LEN,
};

/// Result type shared by the breach lookups.
pub type BreachResult<T> = Result<T, BreachLookupError>;

#[derive(Debug, thiserror::Error)]
pub enum BreachLookupError {
    #[error("enter a password to check")]
    EmptyPassword,
    #[error("breach lookup request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("breach lookup returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed breach response line: {0:?}")]
    Parse(String),
}

impl BreachLookupError {
    /// Transient failures leave the password unchecked and may be retried.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::EmptyPassword)
    }
}
