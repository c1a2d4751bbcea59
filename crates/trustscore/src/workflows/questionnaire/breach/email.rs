use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::super::domain::EmailBreachStatus;
use super::super::validation::has_value;

/// Default latency modelling the network round-trip.
pub const DEFAULT_EMAIL_CHECK_DELAY: Duration = Duration::from_millis(900);

/// Simulated email breach check driven by an injectable random source.
#[derive(Debug, Clone)]
pub struct SimulatedEmailCheck<R = ChaCha8Rng> {
    rng: R,
    delay: Duration,
    breach_probability: f64,
}

impl SimulatedEmailCheck<ChaCha8Rng> {
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()), delay)
    }

    pub fn seeded(seed: u64, delay: Duration) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), delay)
    }
}

impl Default for SimulatedEmailCheck<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_CHECK_DELAY)
    }
}

impl<R: Rng> SimulatedEmailCheck<R> {
    pub fn with_rng(rng: R, delay: Duration) -> Self {
        Self {
            rng,
            delay,
            breach_probability: 0.5,
        }
    }

    /// Overrides the coin bias; `1.0` always breaches, `0.0` never does.
    pub fn with_breach_probability(mut self, probability: f64) -> Self {
        self.breach_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolves after the configured delay. Empty input is left unchecked.
    pub async fn check(&mut self, email: &str) -> EmailBreachStatus {
        if !has_value(email) {
            return EmailBreachStatus::Unchecked;
        }

        tokio::time::sleep(self.delay).await;

        let status = if self.rng.random_bool(self.breach_probability) {
            EmailBreachStatus::Breached
        } else {
            EmailBreachStatus::Safe
        };
        tracing::debug!(?status, "simulated email breach check resolved");
        status
    }
}
