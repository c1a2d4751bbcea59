use crate::workflows::questionnaire::domain::ProfileInput;

/// Valid phone, nothing else beyond the identity step.
pub(super) fn baseline_profile() -> ProfileInput {
    ProfileInput {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "5551234567".to_string(),
        ..ProfileInput::default()
    }
}

/// Every positive factor satisfied.
pub(super) fn complete_profile() -> ProfileInput {
    ProfileInput {
        linkedin: "https://linkedin.com/in/ada".to_string(),
        github: "https://github.com/ada".to_string(),
        twitter: "@ada".to_string(),
        password: "correct horse battery staple".to_string(),
        mfa_enabled: true,
        job_title: "Analyst".to_string(),
        company: "Analytical Engines Ltd".to_string(),
        ..baseline_profile()
    }
}
