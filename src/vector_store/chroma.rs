//! Chroma HTTP client for the groundwater document collection

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::IngresError;
use crate::errors::Result;
use crate::vector_store::VectorStore;

/// Client bound to a single Chroma collection
pub struct ChromaStore {
    client: Client,
    endpoint: String,
    collection_id: String,
    collection_name: String,
}

#[derive(Debug, Deserialize)]
struct CollectionInfo {
    id: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query_texts: Vec<&'a str>,
    n_results: usize,
    include: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    /// One row of documents per query text; we always send exactly one
    documents: Vec<Vec<String>>,
}

impl ChromaStore {
    /// Attach to an existing collection by name.
    ///
    /// Fails when the server is unreachable or the collection does not
    /// exist; the caller treats that as a not-ready service, not a crash.
    pub async fn connect(endpoint: &str, collection: &str) -> Result<Self> {
        // Similarity queries carry no deadline here, matching the service
        // contract; only the generation calls are bounded
        let client = Client::builder()
            .build()
            .map_err(|e| IngresError::Http(e.to_string()))?;

        let url = format!("{endpoint}/api/v1/collections/{collection}");
        debug!("Resolving Chroma collection: {url}");

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| IngresError::Upstream(format!("Chroma connection failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IngresError::Upstream(format!(
                "Failed to resolve collection '{collection}' ({status}): {body}"
            )));
        }

        let info: CollectionInfo = response
            .json()
            .await
            .map_err(|e| IngresError::Upstream(format!("Invalid collection response: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            collection_id: info.id,
            collection_name: collection.to_string(),
        })
    }

    /// Name of the attached collection
    #[must_use]
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}

#[async_trait]
impl VectorStore for ChromaStore {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.endpoint, self.collection_id
        );
        debug!("Querying Chroma: {url} (n_results={k})");

        let request = QueryRequest {
            query_texts: vec![query],
            n_results: k,
            include: vec!["documents"],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| IngresError::Upstream(format!("Chroma query failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IngresError::Upstream(format!(
                "Chroma query error ({status}): {body}"
            )));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| IngresError::Upstream(format!("Invalid query response: {e}")))?;

        Ok(result.documents.into_iter().next().unwrap_or_default())
    }

    async fn count(&self) -> Result<u64> {
        let url = format!(
            "{}/api/v1/collections/{}/count",
            self.endpoint, self.collection_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IngresError::Upstream(format!("Chroma count failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IngresError::Upstream(format!(
                "Chroma count error ({status}): {body}"
            )));
        }

        response
            .json::<u64>()
            .await
            .map_err(|e| IngresError::Upstream(format!("Invalid count response: {e}")))
    }
}
