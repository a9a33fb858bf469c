//! Text-generation provider abstraction
//!
//! The consultation client depends only on the `TextGenerator`
//! capability, so the retry and parse logic never sees a vendor SDK.

pub mod gemini;

use crate::errors::ProviderError;
use async_trait::async_trait;

pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL};

/// Capability interface: one prompt in, raw response text or a typed
/// failure out. Implementations own their transport and timeout.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
