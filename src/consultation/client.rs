//! Consultation call orchestration
//!
//! One call walks Idle -> Building -> Calling and then either
//! Parsing -> Done on success, Backoff -> Calling on a transient
//! failure (up to the attempt cap), or Failed on a fatal failure.
//! Parsing itself never fails; unusable output degrades to the
//! fallback result.

use crate::consultation::parser::parse_response;
use crate::consultation::retry::{RetryPolicy, RetryState};
use crate::consultation::types::ConsultationResult;
use crate::errors::{ConsultError, Result};
use crate::prompts;
use crate::provider::TextGenerator;
use crate::validation::{validate_symptoms, SymptomInput, ValidatorConfig};
use tracing::{debug, info, warn};

/// Retry-and-validate wrapper around a text-generation provider.
///
/// Holds no per-call state; one consultation is in flight at a time.
pub struct ConsultationClient {
    provider: Box<dyn TextGenerator>,
    policy: RetryPolicy,
    validator: ValidatorConfig,
}

impl ConsultationClient {
    pub fn new(
        provider: Box<dyn TextGenerator>,
        policy: RetryPolicy,
        validator: ValidatorConfig,
    ) -> Self {
        Self {
            provider,
            policy,
            validator,
        }
    }

    /// Validate raw input and run one consultation.
    ///
    /// Validation errors return immediately and are never retried.
    pub async fn consult(&self, raw_symptoms: &str) -> Result<ConsultationResult> {
        let input = validate_symptoms(raw_symptoms, &self.validator)?;
        self.consult_validated(&input).await
    }

    /// Run one consultation for already-validated input.
    pub async fn consult_validated(&self, input: &SymptomInput) -> Result<ConsultationResult> {
        let prompt = prompts::build_prompt(input.text());
        debug!(prompt_chars = prompt.len(), "prompt built");

        let mut state = RetryState::new();

        loop {
            state.record_attempt();
            debug!(attempt = state.attempts(), "calling provider");

            match self.provider.generate(&prompt).await {
                Ok(text) => {
                    info!(attempt = state.attempts(), "provider call succeeded");
                    return Ok(parse_response(&text, input.text()));
                }
                Err(e) if !e.is_transient() => {
                    warn!(error = %e, "fatal provider error, not retrying");
                    return Err(ConsultError::Fatal(e));
                }
                Err(e) => {
                    if state.exhausted(&self.policy) {
                        warn!(attempts = state.attempts(), error = %e, "retries exhausted");
                        return Err(ConsultError::RetriesExhausted {
                            attempts: state.attempts(),
                            last: e,
                        });
                    }

                    let delay = state.backoff_delay(&self.policy);
                    warn!(
                        attempt = state.attempts(),
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "transient provider error, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Validator limits this client applies
    pub fn validator_config(&self) -> &ValidatorConfig {
        &self.validator
    }
}
