use super::super::domain::{EmailBreachStatus, ProfileInput, TrustFactor};
use super::super::validation::{has_value, is_valid_phone};
use super::{ScoreComponent, BASE_SCORE};

pub(crate) const PHONE_VALID: i16 = 10;
pub(crate) const PHONE_INVALID: i16 = -10;
pub(crate) const EMAIL_SAFE: i16 = 5;
pub(crate) const EMAIL_BREACHED: i16 = -20;
pub(crate) const LINKEDIN: i16 = 10;
pub(crate) const GITHUB: i16 = 5;
pub(crate) const TWITTER: i16 = 3;
pub(crate) const MFA: i16 = 10;
pub(crate) const PASSWORD_CLEAN: i16 = 5;
pub(crate) const PASSWORD_BREACHED: i16 = -15;
pub(crate) const JOB_PRESENT: i16 = 5;
pub(crate) const JOB_MISSING: i16 = -5;
pub(crate) const COMPANY: i16 = 5;

/// Realized state of every factor, shared by scoring and guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreSignals {
    pub phone_ok: bool,
    pub email_breached: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
    pub has_twitter: bool,
    pub mfa: bool,
    pub password_provided: bool,
    pub password_breaches: Option<u64>,
    pub has_job: bool,
    pub has_company: bool,
}

impl ScoreSignals {
    pub fn collect(
        profile: &ProfileInput,
        email_breach: EmailBreachStatus,
        password_breaches: Option<u64>,
    ) -> Self {
        Self {
            phone_ok: is_valid_phone(&profile.phone),
            email_breached: email_breach.is_breached(),
            has_linkedin: has_value(&profile.linkedin),
            has_github: has_value(&profile.github),
            has_twitter: has_value(&profile.twitter),
            mfa: profile.mfa_enabled,
            password_provided: !profile.password.is_empty(),
            password_breaches,
            has_job: has_value(&profile.job_title),
            has_company: has_value(&profile.company),
        }
    }

    pub fn password_checked(&self) -> bool {
        self.password_breaches.is_some()
    }

    pub fn password_breached(&self) -> bool {
        self.password_breaches.is_some_and(|count| count > 0)
    }
}

/// Returns one component per factor, in display order, and the unclamped total.
pub(crate) fn score_signals(signals: &ScoreSignals) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::with_capacity(TrustFactor::ordered().len());

    let mut push = |factor: TrustFactor, points: i16, notes: &str| {
        components.push(ScoreComponent {
            factor,
            points,
            notes: notes.to_string(),
        });
    };

    if signals.phone_ok {
        push(TrustFactor::Phone, PHONE_VALID, "phone has 8-15 digits");
    } else {
        push(TrustFactor::Phone, PHONE_INVALID, "phone missing or malformed");
    }

    if signals.email_breached {
        push(TrustFactor::EmailBreach, EMAIL_BREACHED, "email found in a breach");
    } else {
        push(TrustFactor::EmailBreach, EMAIL_SAFE, "email not found in breaches");
    }

    if signals.has_linkedin {
        push(TrustFactor::LinkedIn, LINKEDIN, "LinkedIn provided");
    } else {
        push(TrustFactor::LinkedIn, 0, "LinkedIn missing");
    }

    if signals.has_github {
        push(TrustFactor::GitHub, GITHUB, "GitHub linked");
    } else {
        push(TrustFactor::GitHub, 0, "GitHub missing");
    }

    if signals.has_twitter {
        push(TrustFactor::Twitter, TWITTER, "Twitter/X linked");
    } else {
        push(TrustFactor::Twitter, 0, "Twitter/X missing");
    }

    if signals.mfa {
        push(TrustFactor::Mfa, MFA, "MFA enabled");
    } else {
        push(TrustFactor::Mfa, 0, "MFA disabled");
    }

    match signals.password_breaches {
        None => push(TrustFactor::Password, 0, "password not checked"),
        Some(0) => push(TrustFactor::Password, PASSWORD_CLEAN, "password not in breaches"),
        Some(count) => {
            let notes = format!("password found in {count} breach(es)");
            push(TrustFactor::Password, PASSWORD_BREACHED, &notes);
        }
    }

    if signals.has_job {
        push(TrustFactor::JobTitle, JOB_PRESENT, "job title present");
    } else {
        push(TrustFactor::JobTitle, JOB_MISSING, "job title missing");
    }

    if signals.has_company {
        push(TrustFactor::Company, COMPANY, "company/portfolio present");
    } else {
        push(TrustFactor::Company, 0, "company/portfolio missing");
    }

    let total = components
        .iter()
        .fold(BASE_SCORE, |acc, component| acc + component.points);

    (components, total)
}
