use super::common::*;
use crate::workflows::questionnaire::domain::{EmailBreachStatus, Tone, TrustFactor};
use crate::workflows::questionnaire::scoring::{compute_score, group_thousands, ScoreResult};

fn insight_texts(result: &ScoreResult) -> Vec<&str> {
    result.insights.iter().map(|i| i.text.as_str()).collect()
}

#[test]
fn baseline_insights_follow_display_order() {
    let result = compute_score(&baseline_profile(), EmailBreachStatus::Safe, None);

    assert_eq!(
        insight_texts(&result),
        vec![
            "Valid phone",
            "Email safe",
            "LinkedIn missing",
            "No password provided for check",
        ]
    );
}

#[test]
fn complete_insights_include_conditional_entries() {
    let result = compute_score(&complete_profile(), EmailBreachStatus::Safe, Some(0));

    assert_eq!(
        insight_texts(&result),
        vec![
            "Valid phone",
            "Email safe",
            "LinkedIn provided",
            "GitHub linked",
            "Twitter/X linked",
            "MFA enabled",
            "Strong password (not breached)",
            "Job title added",
            "Company/Portfolio added",
        ]
    );
    assert!(result.insights.iter().all(|i| i.tone == Tone::Positive));
}

#[test]
fn password_insight_reflects_check_state() {
    let mut profile = baseline_profile();
    profile.password = "letmein".to_string();

    let unchecked = compute_score(&profile, EmailBreachStatus::Safe, None);
    let breached = compute_score(&profile, EmailBreachStatus::Safe, Some(1_234_567));

    assert!(insight_texts(&unchecked).contains(&"Password not checked"));
    assert!(insight_texts(&breached).contains(&"Password in 1,234,567 breaches"));
}

#[test]
fn baseline_recommendations_name_recoverable_points() {
    let result = compute_score(&baseline_profile(), EmailBreachStatus::Safe, None);

    let factors: Vec<Option<TrustFactor>> =
        result.recommendations.iter().map(|r| r.factor).collect();
    assert_eq!(
        factors,
        vec![
            Some(TrustFactor::Mfa),
            Some(TrustFactor::GitHub),
            Some(TrustFactor::Twitter),
            Some(TrustFactor::JobTitle),
            Some(TrustFactor::Company),
            Some(TrustFactor::LinkedIn),
            Some(TrustFactor::Password),
        ]
    );
    let mfa = &result.recommendations[0];
    assert_eq!(mfa.recoverable_points, Some(10));
    assert_eq!(mfa.text, "Enable MFA / 2FA on key accounts (+10).");
    assert!(result
        .recommendations
        .iter()
        .all(|r| r.text.contains(&format!("(+{})", r.recoverable_points.unwrap_or(0)))));
}

#[test]
fn breaches_trigger_remediation_recommendations() {
    let mut profile = complete_profile();
    profile.phone = "555".to_string();

    let result = compute_score(&profile, EmailBreachStatus::Breached, Some(42));

    let factors: Vec<Option<TrustFactor>> =
        result.recommendations.iter().map(|r| r.factor).collect();
    assert_eq!(
        factors,
        vec![
            Some(TrustFactor::Phone),
            Some(TrustFactor::EmailBreach),
            Some(TrustFactor::Password),
        ]
    );
    assert_eq!(result.recommendations[2].recoverable_points, Some(20));
}

#[test]
fn satisfied_profile_gets_single_affirmation() {
    let result = compute_score(&complete_profile(), EmailBreachStatus::Safe, Some(0));

    assert_eq!(result.recommendations.len(), 1);
    let only = &result.recommendations[0];
    assert_eq!(only.factor, None);
    assert_eq!(only.recoverable_points, None);
    assert_eq!(only.text, "Looking good! Keep up safe practices.");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(52_256_179), "52,256,179");
}
