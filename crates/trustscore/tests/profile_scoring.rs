//! Scoring a profile supplied as JSON, the way batch callers feed the engine.

use serde_json::{json, Value};

use trustscore::workflows::questionnaire::domain::TrustFactor;
use trustscore::workflows::questionnaire::scoring::AVERAGE_SCORE;
use trustscore::workflows::questionnaire::{
    compute_score, EmailBreachStatus, ProfileInput, RiskTier,
};

#[test]
fn partial_json_profile_defaults_missing_fields() {
    let profile: ProfileInput = serde_json::from_value(json!({
        "name": "Grace",
        "phone": "123",
        "mfa_enabled": true
    }))
    .expect("profile deserializes");

    assert!(profile.email.is_empty());
    assert!(profile.mfa_enabled);

    let result = compute_score(&profile, EmailBreachStatus::Breached, None);
    // 50 - phone 10 - email 20 + mfa 10 - job 5
    assert_eq!(result.score, 25);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.comparison.average, AVERAGE_SCORE);
    assert_eq!(result.components.len(), TrustFactor::ordered().len());

    let total: i16 = result.components.iter().map(|c| c.points).sum();
    assert_eq!(total + 50, i16::from(result.score));
}

#[test]
fn result_serializes_with_uppercase_tier() {
    let profile = ProfileInput {
        phone: "5551234567".to_string(),
        linkedin: "https://linkedin.com/in/grace".to_string(),
        job_title: "Rear Admiral".to_string(),
        ..ProfileInput::default()
    };
    let result = compute_score(&profile, EmailBreachStatus::Safe, Some(0));

    let value: Value = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(value["score"], 85);
    assert_eq!(value["risk_tier"], "LOW");
    assert_eq!(value["comparison"]["yours"], 85);
    assert_eq!(value["insights"][0]["text"], "Valid phone");
    assert_eq!(value["insights"][0]["tone"], "positive");
}
