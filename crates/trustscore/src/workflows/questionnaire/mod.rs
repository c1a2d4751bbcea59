pub mod breach;
pub mod domain;
pub mod gauge;
pub mod report;
pub mod scoring;
pub mod share;
pub mod validation;

mod session;
mod wizard;

pub use domain::{EmailBreachStatus, ProfileInput, RiskTier, Tone, TrustFactor};
pub use scoring::{compute_score, ScoreResult};
pub use session::{QuestionnaireSession, SessionError};
pub use wizard::{StepStatus, WizardState, WizardStep};
