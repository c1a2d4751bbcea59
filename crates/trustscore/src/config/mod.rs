use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::workflows::questionnaire::breach::DEFAULT_RANGE_API;
use crate::workflows::questionnaire::report::REPORT_FILE_NAME;
use crate::workflows::questionnaire::share::DEFAULT_SHARE_BASE_URL;

const DEFAULT_BREACH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_EMAIL_CHECK_DELAY_MS: u64 = 900;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub breach: BreachConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_url = url_var("TRUST_BREACH_API_URL", DEFAULT_RANGE_API)?;
        let timeout_secs = u64_var("TRUST_BREACH_TIMEOUT_SECS", DEFAULT_BREACH_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidNumber {
                variable: "TRUST_BREACH_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }
        let email_delay_ms = u64_var("TRUST_EMAIL_CHECK_DELAY_MS", DEFAULT_EMAIL_CHECK_DELAY_MS)?;

        let report_path = env::var("TRUST_REPORT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(REPORT_FILE_NAME), PathBuf::from);
        let share_base_url = url_var("TRUST_SHARE_BASE_URL", DEFAULT_SHARE_BASE_URL)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            breach: BreachConfig {
                api_url,
                timeout: Duration::from_secs(timeout_secs),
                email_check_delay: Duration::from_millis(email_delay_ms),
            },
            export: ExportConfig {
                report_path,
                share_base_url,
            },
        })
    }
}

fn url_var(variable: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(variable) {
        Ok(value) => {
            let trimmed = value.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                Err(ConfigError::EmptyUrl { variable })
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(_) => Ok(default.to_string()),
    }
}

fn u64_var(variable: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { variable, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Breach lookup endpoints and timings.
#[derive(Debug, Clone)]
pub struct BreachConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub email_check_delay: Duration,
}

/// Where exported reports land and how share links are built.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub report_path: PathBuf,
    pub share_base_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        variable: &'static str,
        value: String,
    },
    EmptyUrl {
        variable: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a positive integer (got '{value}')")
            }
            ConfigError::EmptyUrl { variable } => write!(f, "{variable} must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
