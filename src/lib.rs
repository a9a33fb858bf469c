//! ConsentRight - terminal medical consultation assistant
//!
//! Forwards a free-text symptom description to the Gemini API and
//! returns a structured specialist recommendation. The reusable core is
//! the retry-and-validate wrapper in [`consultation`]: input validation
//! up front, bounded retries with jittered backoff around one external
//! text-generation call, and tolerant response parsing with a
//! guaranteed fallback result.

pub mod cases;
pub mod cli;
pub mod config;
pub mod consultation;
pub mod display;
pub mod errors;
pub mod prompts;
pub mod provider;
pub mod validation;

// Re-export commonly used types
pub use consultation::{ConsultationClient, ConsultationResult, RetryPolicy, Specialty, Urgency};
pub use errors::{ConsultError, ProviderError, Result};
pub use provider::{GeminiProvider, TextGenerator};
pub use validation::{validate_symptoms, SymptomInput, ValidationError, ValidatorConfig};
