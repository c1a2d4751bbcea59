use super::super::domain::{Tone, TrustFactor};
use super::rules::ScoreSignals;
use super::{Insight, Recommendation};

const AFFIRMATION: &str = "Looking good! Keep up safe practices.";

pub(crate) fn insights(signals: &ScoreSignals) -> Vec<Insight> {
    let mut insights = Vec::new();
    let mut push = |factor: TrustFactor, tone: Tone, text: String| {
        insights.push(Insight { factor, tone, text });
    };

    if signals.phone_ok {
        push(TrustFactor::Phone, Tone::Positive, "Valid phone".into());
    } else {
        push(TrustFactor::Phone, Tone::Negative, "Invalid phone".into());
    }

    if signals.email_breached {
        push(TrustFactor::EmailBreach, Tone::Negative, "Email in breach".into());
    } else {
        push(TrustFactor::EmailBreach, Tone::Positive, "Email safe".into());
    }

    if signals.has_linkedin {
        push(TrustFactor::LinkedIn, Tone::Positive, "LinkedIn provided".into());
    } else {
        push(TrustFactor::LinkedIn, Tone::Negative, "LinkedIn missing".into());
    }

    if signals.has_github {
        push(TrustFactor::GitHub, Tone::Positive, "GitHub linked".into());
    }
    if signals.has_twitter {
        push(TrustFactor::Twitter, Tone::Positive, "Twitter/X linked".into());
    }
    if signals.mfa {
        push(TrustFactor::Mfa, Tone::Positive, "MFA enabled".into());
    }

    if signals.password_provided {
        match signals.password_breaches {
            None => push(
                TrustFactor::Password,
                Tone::Neutral,
                "Password not checked".into(),
            ),
            Some(0) => push(
                TrustFactor::Password,
                Tone::Positive,
                "Strong password (not breached)".into(),
            ),
            Some(count) => push(
                TrustFactor::Password,
                Tone::Negative,
                format!("Password in {} breaches", group_thousands(count)),
            ),
        }
    } else {
        push(
            TrustFactor::Password,
            Tone::Neutral,
            "No password provided for check".into(),
        );
    }

    if signals.has_job {
        push(TrustFactor::JobTitle, Tone::Positive, "Job title added".into());
    }
    if signals.has_company {
        push(
            TrustFactor::Company,
            Tone::Positive,
            "Company/Portfolio added".into(),
        );
    }

    insights
}

pub(crate) fn recommendations(signals: &ScoreSignals) -> Vec<Recommendation> {
    let mut items = Vec::new();
    let mut push = |factor: TrustFactor, points: u8, text: &str| {
        items.push(Recommendation {
            factor: Some(factor),
            text: format!("{text} (+{points})."),
            recoverable_points: Some(points),
        });
    };

    if !signals.phone_ok {
        push(TrustFactor::Phone, 20, "Fix your phone number to 8-15 digits");
    }
    if signals.email_breached {
        push(
            TrustFactor::EmailBreach,
            25,
            "Email breached: change its password and enable 2FA",
        );
    }
    if !signals.mfa {
        push(TrustFactor::Mfa, 10, "Enable MFA / 2FA on key accounts");
    }
    if !signals.has_github {
        push(
            TrustFactor::GitHub,
            5,
            "Add a GitHub link to boost credibility",
        );
    }
    if !signals.has_twitter {
        push(
            TrustFactor::Twitter,
            3,
            "Add a Twitter/X handle to round out your public footprint",
        );
    }
    if !signals.has_job {
        push(
            TrustFactor::JobTitle,
            10,
            "Add a job title for professional context",
        );
    }
    if !signals.has_company {
        push(
            TrustFactor::Company,
            5,
            "Add a company/portfolio for professional context",
        );
    }
    if !signals.has_linkedin {
        push(TrustFactor::LinkedIn, 10, "Add a valid LinkedIn URL");
    }
    if !signals.password_checked() {
        push(
            TrustFactor::Password,
            5,
            "Check a sample password against known breaches (privacy-safe)",
        );
    }
    if signals.password_breached() {
        push(
            TrustFactor::Password,
            20,
            "Use a unique, strong password (long + random)",
        );
    }

    if items.is_empty() {
        items.push(Recommendation {
            factor: None,
            text: AFFIRMATION.to_string(),
            recoverable_points: None,
        });
    }

    items
}

/// Formats a count with comma thousands separators, e.g. `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
