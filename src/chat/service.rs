//! Chat service: orchestration and the bounded-retry generation protocol

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::chat::prompt;
use crate::errors::IngresError;
use crate::errors::Result;
use crate::llm::extract_answer;
use crate::llm::GenerationClient;
use crate::models::ChatResponse;
use crate::vector_store::VectorStore;

/// Maximum generation attempts: 1 initial + 2 retries
const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause before retrying an overloaded reply. No jitter, no growth;
/// a known limitation kept as-is from the original service.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Provider success status
const OK: u16 = 200;

/// The provider's transient capacity-exceeded status, the only reply
/// eligible for retry. Timeouts and other transport failures are terminal.
const OVERLOADED: u16 = 503;

/// Readiness-checked handle to the startup-initialized collaborators.
///
/// Built once at startup and read-only afterwards. Initialization failures
/// leave it not-ready instead of crashing the process; the health and chat
/// operations detect that state themselves.
pub struct ServiceState {
    inner: Option<ReadyServices>,
}

struct ReadyServices {
    store: Arc<dyn VectorStore>,
    generator: Arc<dyn GenerationClient>,
}

impl ServiceState {
    /// State with both collaborators initialized
    #[must_use]
    pub fn ready(store: Arc<dyn VectorStore>, generator: Arc<dyn GenerationClient>) -> Self {
        Self {
            inner: Some(ReadyServices { store, generator }),
        }
    }

    /// Degraded state after a startup failure
    #[must_use]
    pub fn not_ready() -> Self {
        Self { inner: None }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.is_some()
    }

    fn services(&self) -> Result<&ReadyServices> {
        self.inner.as_ref().ok_or_else(|| {
            IngresError::ServiceUnavailable("Service not initialized".to_string())
        })
    }
}

/// The chat service
pub struct ChatService {
    state: ServiceState,
}

impl ChatService {
    #[must_use]
    pub fn new(state: ServiceState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Document count of the attached collection, for the health check.
    ///
    /// Fails with `ServiceUnavailable` before touching any collaborator when
    /// the service never became ready.
    pub async fn document_count(&self) -> Result<u64> {
        let services = self.state.services()?;
        services.store.count().await
    }

    /// Answer a query: retrieve context, build the prompt, generate.
    ///
    /// # Errors
    /// - `ServiceUnavailable` when the service never initialized, or when
    ///   generation stayed overloaded through every attempt
    /// - `InvalidInput` for a blank query or zero `n_results`
    /// - `Upstream` when the similarity search fails (never retried)
    /// - `GenerationRejected` for terminal provider statuses, with the
    ///   provider's status code and raw body preserved
    /// - `MalformedGeneration` when a success reply carries no answer text
    pub async fn answer(&self, query: &str, n_results: usize) -> Result<ChatResponse> {
        let services = self.state.services()?;

        let question = query.trim();
        if question.is_empty() {
            return Err(IngresError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }
        if n_results == 0 {
            return Err(IngresError::InvalidInput(
                "n_results must be positive".to_string(),
            ));
        }

        info!("Processing chat query: {question}");

        debug!("Step 1: Retrieving documents (n_results={n_results})");
        let documents = services.store.search(question, n_results).await?;
        debug!("Retrieved {} documents", documents.len());

        // An empty result set is passed through; the generator just sees an
        // empty context block
        debug!("Step 2: Assembling prompt");
        let context = prompt::assemble_context(&documents);
        let generation_prompt = prompt::build_prompt(question, &context);

        debug!("Step 3: Generating answer");
        let answer = self
            .generate_with_retry(services.generator.as_ref(), &generation_prompt)
            .await?;

        info!("Chat query completed successfully");

        Ok(ChatResponse::success(query, answer))
    }

    /// Run the generation call under the bounded-retry protocol.
    ///
    /// Only the overloaded status retries, after a fixed 2-second pause and
    /// only while attempts remain. Every other non-success reply, and any
    /// transport error or per-attempt timeout, is terminal on first
    /// occurrence.
    async fn generate_with_retry(
        &self,
        generator: &dyn GenerationClient,
        generation_prompt: &str,
    ) -> Result<String> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let reply = generator.generate(generation_prompt).await?;

            match reply.status {
                OK => return extract_answer(&reply.body),
                OVERLOADED => {
                    if attempt < MAX_ATTEMPTS {
                        warn!(
                            "Generation overloaded (attempt {attempt}/{MAX_ATTEMPTS}), \
                             retrying in {}s",
                            RETRY_DELAY.as_secs()
                        );
                        tokio::time::sleep(RETRY_DELAY).await;
                        continue;
                    }
                    return Err(IngresError::ServiceUnavailable(
                        "AI temporarily unavailable".to_string(),
                    ));
                }
                status => {
                    return Err(IngresError::GenerationRejected {
                        status,
                        body: reply.body,
                    })
                }
            }
        }
    }
}
