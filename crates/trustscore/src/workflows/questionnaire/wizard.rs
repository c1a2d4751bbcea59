use serde::Serialize;

use super::domain::{ProfileField, ProfileInput};
use super::validation::{require_fields, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Social,
    Security,
    Credibility,
    Results,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Identity,
            Self::Social,
            Self::Security,
            Self::Credibility,
            Self::Results,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Social => "Social Presence",
            Self::Security => "Security",
            Self::Credibility => "Credibility",
            Self::Results => "Results",
        }
    }

    /// Fields that must be filled before leaving this step.
    pub const fn required_fields(self) -> &'static [ProfileField] {
        match self {
            Self::Identity => &[ProfileField::Name, ProfileField::Email, ProfileField::Phone],
            Self::Credibility => &[ProfileField::JobTitle],
            Self::Social | Self::Security | Self::Results => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Index of the visible step; purely navigational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardState {
    current: usize,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ordered()[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == WizardStep::ordered().len()
    }

    /// Validates the current step and advances; stays put on failure.
    pub fn next(&mut self, profile: &ProfileInput) -> Result<WizardStep, ValidationError> {
        require_fields(profile, self.current_step().required_fields())?;
        if !self.is_last() {
            self.current += 1;
        }
        Ok(self.current_step())
    }

    pub fn prev(&mut self) -> WizardStep {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    /// The "show results" action: only the job title gates it.
    pub fn jump_to_results(&mut self, profile: &ProfileInput) -> Result<(), ValidationError> {
        require_fields(profile, WizardStep::Credibility.required_fields())?;
        self.current = WizardStep::ordered().len() - 1;
        Ok(())
    }

    pub fn progress(&self) -> Vec<(WizardStep, StepStatus)> {
        WizardStep::ordered()
            .into_iter()
            .enumerate()
            .map(|(idx, step)| {
                let status = if idx < self.current {
                    StepStatus::Completed
                } else if idx == self.current {
                    StepStatus::Active
                } else {
                    StepStatus::Pending
                };
                (step, status)
            })
            .collect()
    }
}
