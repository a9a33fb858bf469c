//! Retry policy and per-call retry state
//!
//! Exponential backoff with jitter for transient provider failures.
//! The state lives for exactly one consultation call and is discarded
//! after success or exhaustion.

use rand::Rng;
use std::time::Duration;

/// Retry configuration for one consultation call
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first one
    pub max_attempts: u32,

    /// Delay before the second attempt; doubles each retry
    pub base_delay: Duration,

    /// Jitter applied to each delay, as a fraction of the delay
    pub jitter_ratio: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            jitter_ratio: 0.25,
        }
    }
}

/// Transient attempt counter for a single call
#[derive(Debug, Clone, Default)]
pub struct RetryState {
    attempts: u32,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Record one completed attempt
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// True once the attempt cap is reached
    pub fn exhausted(&self, policy: &RetryPolicy) -> bool {
        self.attempts >= policy.max_attempts
    }

    /// Backoff delay before the next attempt.
    ///
    /// Exponential in the number of attempts already made, with uniform
    /// jitter of +/- `jitter_ratio` so synchronized clients do not
    /// hammer a rate-limited endpoint in lockstep.
    pub fn backoff_delay(&self, policy: &RetryPolicy) -> Duration {
        let exponent = self.attempts.saturating_sub(1).min(16);
        let base_ms = policy.base_delay.as_millis() as f64 * 2f64.powi(exponent as i32);

        let jitter = if policy.jitter_ratio > 0.0 {
            rand::thread_rng().gen_range(-policy.jitter_ratio..=policy.jitter_ratio)
        } else {
            0.0
        };

        Duration::from_millis((base_ms * (1.0 + jitter)).max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_jitter_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            jitter_ratio: 0.0,
        }
    }

    #[test]
    fn test_exhaustion_at_cap() {
        let policy = no_jitter_policy();
        let mut state = RetryState::new();
        assert!(!state.exhausted(&policy));

        state.record_attempt();
        state.record_attempt();
        assert!(!state.exhausted(&policy));

        state.record_attempt();
        assert!(state.exhausted(&policy));
        assert_eq!(state.attempts(), 3);
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = no_jitter_policy();
        let mut state = RetryState::new();

        state.record_attempt();
        assert_eq!(state.backoff_delay(&policy), Duration::from_millis(1000));

        state.record_attempt();
        assert_eq!(state.backoff_delay(&policy), Duration::from_millis(2000));

        state.record_attempt();
        assert_eq!(state.backoff_delay(&policy), Duration::from_millis(4000));
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            jitter_ratio: 0.25,
        };
        let mut state = RetryState::new();
        state.record_attempt();

        for _ in 0..100 {
            let delay = state.backoff_delay(&policy).as_millis();
            assert!((750..=1250).contains(&delay), "delay {} out of band", delay);
        }
    }
}
