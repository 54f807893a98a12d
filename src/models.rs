//! Request and response models for the chat API

use serde::Deserialize;
use serde::Serialize;

/// Body of a POST /chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// How many documents to retrieve from the vector store
    #[serde(default = "default_n_results")]
    pub n_results: usize,
}

pub fn default_n_results() -> usize {
    5
}

/// Successful chat answer, echoing the original query
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub status: String,
    pub query: String,
    pub response: String,
}

impl ChatResponse {
    /// Build a success response for the given query
    #[must_use]
    pub fn success(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            query: query.into(),
            response: response.into(),
        }
    }
}
