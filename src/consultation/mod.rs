//! Consultation client
//!
//! Turns a validated symptom description into a structured specialist
//! recommendation via one external text-generation call, masking
//! transient provider failures behind bounded retries.

pub mod client;
pub mod parser;
pub mod retry;
pub mod types;

pub use client::ConsultationClient;
pub use parser::parse_response;
pub use retry::{RetryPolicy, RetryState};
pub use types::{ConsultationResult, Specialty, Urgency};
