//! Symptom input validation
//!
//! Pure pre-flight checks on the raw symptom string. Nothing here
//! touches the network; rejected input never reaches the provider.

pub mod types;
pub mod validator;

pub use types::{SymptomInput, ValidationError, ValidatorConfig};
pub use validator::validate_symptoms;
