//! Human digital trust scoring: questionnaire, breach lookups, scoring, gauge
//! animation, and masked report export.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
