use std::time::Duration;

use sha1::{Digest, Sha1};

use super::{BreachLookupError, BreachResult};

pub const DEFAULT_RANGE_API: &str = "https://api.pwnedpasswords.com";

/// Number of hex characters sent to the range API.
pub const PREFIX_LEN: usize = 5;

/// Uppercase SHA-1 of a password split into the queried prefix and the
/// locally matched suffix.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    prefix: String,
    suffix: String,
}

impl PasswordHash {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

pub fn hash_password(password: &str) -> PasswordHash {
    let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    PasswordHash {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
    }
}

/// Finds `suffix` in a `SUFFIX:COUNT` listing and returns its count, or 0.
pub fn parse_range_response(body: &str, suffix: &str) -> BreachResult<u64> {
    for line in body.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (candidate, count) = match line.split_once(':') {
            Some((candidate, count)) => (candidate, Some(count)),
            None => (line, None),
        };
        if !candidate.eq_ignore_ascii_case(suffix) {
            continue;
        }
        return count
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .ok_or_else(|| BreachLookupError::Parse(line.to_string()));
    }
    Ok(0)
}

/// Client for the k-anonymous password range API.
#[derive(Debug, Clone)]
pub struct PwnedPasswordsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PwnedPasswordsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> BreachResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("trustscore/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of known breaches containing `password`; 0 when clean.
    pub async fn breach_count(&self, password: &str) -> BreachResult<u64> {
        if password.is_empty() {
            return Err(BreachLookupError::EmptyPassword);
        }

        let hash = hash_password(password);
        let body = self.fetch_range(hash.prefix()).await?;
        let count = parse_range_response(&body, hash.suffix())?;

        tracing::info!(
            prefix = hash.prefix(),
            breached = count > 0,
            "password range lookup complete"
        );
        Ok(count)
    }

    async fn fetch_range(&self, prefix: &str) -> BreachResult<String> {
        let url = format!("{}/range/{prefix}", self.base_url);
        tracing::debug!(%url, "querying password range");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachLookupError::Status(status));
        }
        Ok(response.text().await?)
    }
}
