use serde::{Deserialize, Serialize};

/// Profile fields collected across the questionnaire steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub password: String,
    pub mfa_enabled: bool,
    pub job_title: String,
    pub company: String,
}

/// Result of the simulated email breach check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailBreachStatus {
    #[default]
    Unchecked,
    Safe,
    Breached,
}

impl EmailBreachStatus {
    pub const fn is_breached(self) -> bool {
        matches!(self, Self::Breached)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unchecked => "Not checked",
            Self::Safe => "Email appears safe (simulated)",
            Self::Breached => "Email found in a breach (simulated)",
        }
    }
}

/// Coarse bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const HIGH_BELOW: u8 = 40;
    pub const LOW_FROM: u8 = 70;

    pub const fn from_score(score: u8) -> Self {
        if score < Self::HIGH_BELOW {
            Self::High
        } else if score < Self::LOW_FROM {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Every signal the engine weighs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustFactor {
    Phone,
    EmailBreach,
    LinkedIn,
    GitHub,
    Twitter,
    Mfa,
    Password,
    JobTitle,
    Company,
}

impl TrustFactor {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Phone,
            Self::EmailBreach,
            Self::LinkedIn,
            Self::GitHub,
            Self::Twitter,
            Self::Mfa,
            Self::Password,
            Self::JobTitle,
            Self::Company,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::EmailBreach => "Email breach",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter/X",
            Self::Mfa => "MFA",
            Self::Password => "Password",
            Self::JobTitle => "Job title",
            Self::Company => "Company/Portfolio",
        }
    }
}

/// Whether a factor helped, hurt, or left the score untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "!",
            Self::Neutral => "?",
        }
    }
}

/// Text inputs of the questionnaire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Twitter,
    Password,
    JobTitle,
    Company,
}

impl ProfileField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::LinkedIn => "LinkedIn URL",
            Self::GitHub => "GitHub URL",
            Self::Twitter => "Twitter/X handle",
            Self::Password => "Sample password",
            Self::JobTitle => "Job title",
            Self::Company => "Company/Portfolio",
        }
    }

    pub fn value(self, profile: &ProfileInput) -> &str {
        match self {
            Self::Name => &profile.name,
            Self::Email => &profile.email,
            Self::Phone => &profile.phone,
            Self::LinkedIn => &profile.linkedin,
            Self::GitHub => &profile.github,
            Self::Twitter => &profile.twitter,
            Self::Password => &profile.password,
            Self::JobTitle => &profile.job_title,
            Self::Company => &profile.company,
        }
    }
}
