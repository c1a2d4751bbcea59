use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::questionnaire::breach::BreachLookupError;
use crate::workflows::questionnaire::report::ExportError;
use crate::workflows::questionnaire::share::ClipboardError;
use crate::workflows::questionnaire::validation::ValidationError;
use crate::workflows::questionnaire::SessionError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Profile(serde_json::Error),
    Validation(ValidationError),
    Breach(BreachLookupError),
    Export(ExportError),
    Clipboard(ClipboardError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Profile(err) => write!(f, "invalid profile: {}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Breach(err) => write!(f, "{}", err),
            AppError::Export(err) => write!(f, "export failed: {}", err),
            AppError::Clipboard(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Profile(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Breach(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Clipboard(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Profile(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BreachLookupError> for AppError {
    fn from(value: BreachLookupError) -> Self {
        Self::Breach(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<ClipboardError> for AppError {
    fn from(value: ClipboardError) -> Self {
        Self::Clipboard(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::Validation(err) => Self::Validation(err),
            SessionError::Breach(err) => Self::Breach(err),
        }
    }
}
