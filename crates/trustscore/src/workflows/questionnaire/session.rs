use chrono::NaiveDate;
use rand::Rng;

use super::breach::{
    hash_password, BreachLookupError, PasswordHash, PwnedPasswordsClient, SimulatedEmailCheck,
};
use super::domain::{EmailBreachStatus, ProfileInput};
use super::report::ReportSnapshot;
use super::scoring::{compute_score, ScoreResult};
use super::validation::{has_value, ValidationError};
use super::wizard::{WizardState, WizardStep};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Breach(#[from] BreachLookupError),
}

#[derive(Debug, Clone)]
struct EmailCheckRecord {
    email: String,
    status: EmailBreachStatus,
}

#[derive(Debug, Clone)]
struct PasswordCheckRecord {
    hash: PasswordHash,
    count: u64,
}

/// One questionnaire run: form state, cached breach results, and the latest score.
///
/// Breach results are keyed to the value they were computed for, so editing the
/// email or password drops the stale result.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireSession {
    profile: ProfileInput,
    wizard: WizardState,
    email_check: Option<EmailCheckRecord>,
    password_check: Option<PasswordCheckRecord>,
    result: Option<ScoreResult>,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ProfileInput) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> &ProfileInput {
        &self.profile
    }

    /// Edits the form. Cached breach results survive only if their input is unchanged.
    pub fn update_profile(&mut self, edit: impl FnOnce(&mut ProfileInput)) {
        edit(&mut self.profile);
        if self
            .email_check
            .as_ref()
            .is_some_and(|record| record.email != self.profile.email.trim())
        {
            self.email_check = None;
        }
        if self.password_check.is_some() {
            let current = hash_password(&self.profile.password);
            if self
                .password_check
                .as_ref()
                .is_some_and(|record| record.hash != current)
            {
                self.password_check = None;
            }
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn next_step(&mut self) -> Result<WizardStep, ValidationError> {
        self.wizard.next(&self.profile)
    }

    pub fn prev_step(&mut self) -> WizardStep {
        self.wizard.prev()
    }

    pub fn email_breach(&self) -> EmailBreachStatus {
        self.email_check
            .as_ref()
            .map_or(EmailBreachStatus::Unchecked, |record| record.status)
    }

    pub fn password_breaches(&self) -> Option<u64> {
        self.password_check.as_ref().map(|record| record.count)
    }

    /// Email that still needs a breach check, if any.
    pub fn pending_email_check(&self) -> Option<String> {
        let email = self.profile.email.trim();
        let cached = self
            .email_check
            .as_ref()
            .is_some_and(|record| record.email == email);
        (has_value(email) && !cached).then(|| email.to_string())
    }

    /// Stores a check that ran outside the session. Ignored if the email has
    /// changed since the check started.
    pub fn record_email_check(&mut self, email: String, status: EmailBreachStatus) -> bool {
        if email != self.profile.email.trim() {
            return false;
        }
        self.email_check = Some(EmailCheckRecord { email, status });
        true
    }

    /// Runs the simulated check when the email field loses focus.
    pub async fn email_blurred<R: Rng>(
        &mut self,
        checker: &mut SimulatedEmailCheck<R>,
    ) -> EmailBreachStatus {
        let Some(email) = self.pending_email_check() else {
            return self.email_breach();
        };

        let status = checker.check(&email).await;
        self.record_email_check(email, status);
        status
    }

    /// Looks up the current password. On failure the password is left unchecked.
    pub async fn check_password(
        &mut self,
        client: &PwnedPasswordsClient,
    ) -> Result<u64, SessionError> {
        match client.breach_count(&self.profile.password).await {
            Ok(count) => {
                self.password_check = Some(PasswordCheckRecord {
                    hash: hash_password(&self.profile.password),
                    count,
                });
                Ok(count)
            }
            Err(err) => {
                if err.is_transient() {
                    tracing::warn!(error = %err, "password breach check failed");
                }
                self.password_check = None;
                Err(err.into())
            }
        }
    }

    /// Jumps to the results step and replaces the stored result with a fresh one.
    pub fn show_results(&mut self) -> Result<&ScoreResult, SessionError> {
        self.wizard.jump_to_results(&self.profile)?;
        let result = compute_score(&self.profile, self.email_breach(), self.password_breaches());
        Ok(self.result.insert(result))
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn report_snapshot(&self, generated_on: NaiveDate) -> Option<ReportSnapshot> {
        self.result
            .as_ref()
            .map(|result| ReportSnapshot::capture(&self.profile, result, generated_on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn filled() -> ProfileInput {
        ProfileInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234567".to_string(),
            job_title: "Analyst".to_string(),
            ..ProfileInput::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn email_result_is_cached_until_email_changes() {
        let mut session = QuestionnaireSession::with_profile(filled());
        let mut breached =
            SimulatedEmailCheck::seeded(0, Duration::from_millis(900)).with_breach_probability(1.0);
        let mut safe =
            SimulatedEmailCheck::seeded(0, Duration::from_millis(900)).with_breach_probability(0.0);

        assert_eq!(session.email_breach(), EmailBreachStatus::Unchecked);
        assert_eq!(session.email_blurred(&mut breached).await, EmailBreachStatus::Breached);
        // cached: a second blur with a different oracle does not re-roll
        assert_eq!(session.email_blurred(&mut safe).await, EmailBreachStatus::Breached);

        session.update_profile(|p| p.email = "ada@another.org".to_string());
        assert_eq!(session.email_breach(), EmailBreachStatus::Unchecked);
        assert_eq!(session.email_blurred(&mut safe).await, EmailBreachStatus::Safe);
    }

    #[tokio::test(start_paused = true)]
    async fn blur_on_empty_email_is_ignored() {
        let mut session = QuestionnaireSession::new();
        let mut checker = SimulatedEmailCheck::seeded(0, Duration::from_millis(900));

        assert_eq!(session.email_blurred(&mut checker).await, EmailBreachStatus::Unchecked);
        assert_eq!(session.email_breach(), EmailBreachStatus::Unchecked);
    }

    #[test]
    fn stale_background_result_is_discarded() {
        let mut session = QuestionnaireSession::with_profile(filled());
        let email = session.pending_email_check().expect("email awaiting check");

        session.update_profile(|p| p.email = "ada@another.org".to_string());

        assert!(!session.record_email_check(email, EmailBreachStatus::Breached));
        assert_eq!(session.email_breach(), EmailBreachStatus::Unchecked);
        assert_eq!(session.pending_email_check().as_deref(), Some("ada@another.org"));

        assert!(session.record_email_check("ada@another.org".to_string(), EmailBreachStatus::Safe));
        assert_eq!(session.pending_email_check(), None);
    }

    #[test]
    fn show_results_requires_job_title() {
        let mut profile = filled();
        profile.job_title.clear();
        let mut session = QuestionnaireSession::with_profile(profile);

        let err = session.show_results().unwrap_err();

        assert!(matches!(err, SessionError::Validation(ValidationError::Missing(_))));
        assert!(session.result().is_none());
        assert_eq!(session.current_step(), WizardStep::Identity);
    }

    #[test]
    fn show_results_recomputes_each_time() {
        let mut session = QuestionnaireSession::with_profile(filled());

        let first = session.show_results().unwrap().score;
        session.update_profile(|p| p.mfa_enabled = true);
        let second = session.show_results().unwrap().score;

        assert_eq!(session.current_step(), WizardStep::Results);
        assert_eq!(second, first + 10);
        assert!(session.report_snapshot(NaiveDate::MIN).is_some());
    }
}
