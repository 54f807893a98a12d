//! Read-only access to the pre-built groundwater vector index
//!
//! The index is built and populated by an offline pipeline; this service only
//! runs similarity queries against it. No retry or caching happens here.

pub mod chroma;

pub use chroma::ChromaStore;

use async_trait::async_trait;

use crate::errors::Result;

/// Similarity-search interface consumed by the chat service
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Return the `k` most similar document texts for `query`, most relevant
    /// first. May return fewer than `k` documents, including none.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<String>>;

    /// Number of documents held by the underlying collection
    async fn count(&self) -> Result<u64>;
}
