//! Error types for the ConsentRight consultation pipeline
//!
//! Splits failures into the taxonomy the retry loop needs: validation
//! errors (never retried), transient provider errors (retried with
//! backoff), and fatal provider errors (fail immediately).

use crate::validation::ValidationError;
use thiserror::Error;

/// Failures raised by the external text-generation provider.
///
/// `is_transient()` decides whether the consultation client retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// API rate limit or quota exceeded
    #[error("rate limited by provider")]
    RateLimited,

    /// Per-attempt timeout elapsed
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// 5xx-class response from the provider
    #[error("provider server error (HTTP {status})")]
    ServerError { status: u16 },

    /// Connection could not be established
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    /// Credential rejected (401/403)
    #[error("authentication failed: check your GEMINI_API_KEY")]
    AuthFailed,

    /// Request rejected as malformed (400)
    #[error("malformed request rejected by provider: {0}")]
    MalformedRequest(String),

    /// Anything the provider returned that we cannot classify
    #[error("unknown provider error: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// Whether a retry is expected to help.
    ///
    /// Unknown errors count as transient, matching the conservative
    /// default of retrying what we cannot classify.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::RateLimited
            | ProviderError::Timeout { .. }
            | ProviderError::ServerError { .. }
            | ProviderError::NetworkUnreachable(_)
            | ProviderError::Unknown(_) => true,
            ProviderError::AuthFailed | ProviderError::MalformedRequest(_) => false,
        }
    }
}

/// Top-level error for one consultation call
#[derive(Error, Debug)]
pub enum ConsultError {
    /// Input rejected before any network traffic
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fatal provider failure, surfaced without retry
    #[error("{0}")]
    Fatal(ProviderError),

    /// Every allowed attempt failed with a transient error
    #[error("all {attempts} attempts failed, last error: {last}")]
    RetriesExhausted { attempts: u32, last: ProviderError },

    /// User aborted while a call or backoff sleep was pending
    #[error("consultation interrupted")]
    Interrupted,
}

impl ConsultError {
    /// The provider error behind a terminal failure, if there is one
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            ConsultError::Fatal(e) => Some(e),
            ConsultError::RetriesExhausted { last, .. } => Some(last),
            _ => None,
        }
    }
}

/// Result type alias for consultation operations
pub type Result<T> = std::result::Result<T, ConsultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::RateLimited.is_transient());
        assert!(ProviderError::Timeout { duration_ms: 30000 }.is_transient());
        assert!(ProviderError::ServerError { status: 503 }.is_transient());
        assert!(ProviderError::NetworkUnreachable("dns failure".into()).is_transient());
        assert!(ProviderError::Unknown("odd response".into()).is_transient());
    }

    #[test]
    fn test_fatal_classification() {
        assert!(!ProviderError::AuthFailed.is_transient());
        assert!(!ProviderError::MalformedRequest("bad payload".into()).is_transient());
    }

    #[test]
    fn test_exhausted_display_names_last_error() {
        let err = ConsultError::RetriesExhausted {
            attempts: 3,
            last: ProviderError::RateLimited,
        };
        assert!(err.to_string().contains("3 attempts"));
        assert!(err.to_string().contains("rate limited"));
    }
}
