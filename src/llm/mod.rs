//! Generation API access
//!
//! The chat service only sees raw status/body pairs through
//! [`GenerationClient`]; retry classification and payload extraction stay in
//! the service so a stub client can exercise the full contract in tests.

pub mod gemini;

pub use gemini::extract_answer;
pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::errors::Result;

/// Raw outcome of a single generation attempt.
///
/// The provider's HTTP status and unparsed body are preserved verbatim so
/// terminal failures can be passed through to the caller with full detail.
#[derive(Debug, Clone)]
pub struct GenerationReply {
    pub status: u16,
    pub body: String,
}

/// A single generate-content call against the provider
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send one prompt and return the provider's raw reply.
    ///
    /// Transport-level failures (including the per-attempt timeout) surface
    /// as errors and are terminal; only status-level classification is
    /// retried, by the caller.
    async fn generate(&self, prompt: &str) -> Result<GenerationReply>;
}
