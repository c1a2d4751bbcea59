mod guidance;
mod rules;

#[cfg(test)]
mod tests;

use super::domain::{EmailBreachStatus, ProfileInput, RiskTier, Tone, TrustFactor};
use serde::{Deserialize, Serialize};

pub use guidance::group_thousands;

/// Score every fresh profile starts from before factors are applied.
pub const BASE_SCORE: i16 = 50;

/// Reference population average shown next to the user's own score.
pub const AVERAGE_SCORE: u8 = 65;

/// Discrete contribution of one factor, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: TrustFactor,
    pub points: i16,
    pub notes: String,
}

/// Human-readable observation about one factor's realized state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub factor: TrustFactor,
    pub tone: Tone,
    pub text: String,
}

/// Suggested fix for an unmet factor, or the single affirming message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub factor: Option<TrustFactor>,
    pub text: String,
    pub recoverable_points: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub yours: u8,
    pub average: u8,
}

/// Derived output of a full recompute; replaced, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub risk_tier: RiskTier,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub components: Vec<ScoreComponent>,
    pub comparison: ScoreComparison,
}

impl ScoreResult {
    pub fn score_label(&self) -> String {
        format!("{}/100", self.score)
    }

    pub fn risk_label(&self) -> String {
        format!("Risk: {}", self.risk_tier.label())
    }
}

/// Maps the collected profile and breach results to a score, tier, and guidance.
///
/// Breach results are explicit inputs, so the same arguments always produce the
/// same result. An unchecked email scores as safe.
pub fn compute_score(
    profile: &ProfileInput,
    email_breach: EmailBreachStatus,
    password_breaches: Option<u64>,
) -> ScoreResult {
    let signals = rules::ScoreSignals::collect(profile, email_breach, password_breaches);
    let (components, total) = rules::score_signals(&signals);

    let score = total.clamp(0, 100) as u8;
    let risk_tier = RiskTier::from_score(score);

    tracing::debug!(score, tier = risk_tier.label(), "trust score computed");

    ScoreResult {
        score,
        risk_tier,
        insights: guidance::insights(&signals),
        recommendations: guidance::recommendations(&signals),
        components,
        comparison: ScoreComparison {
            yours: score,
            average: AVERAGE_SCORE,
        },
    }
}
