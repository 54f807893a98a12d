//! Gemini generateContent client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::IngresError;
use crate::errors::Result;
use crate::llm::GenerationClient;
use crate::llm::GenerationReply;

/// Per-attempt deadline for a generateContent call
const ATTEMPT_TIMEOUT_SECS: u64 = 30;

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(endpoint: String, model: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(ATTEMPT_TIMEOUT_SECS))
            .build()
            .map_err(|e| IngresError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationReply> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        debug!("Calling Gemini generateContent: {url}");

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| IngresError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| IngresError::Http(e.to_string()))?;

        Ok(GenerationReply { status, body })
    }
}

/// Extract the first candidate's text from a successful generateContent body.
///
/// A body that parses but carries no non-empty text fragment is a malformed
/// reply, distinct from an HTTP-level failure.
pub fn extract_answer(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| IngresError::MalformedGeneration(format!("unparseable body: {e}")))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(IngresError::MalformedGeneration(
            "no candidate text in response".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_answer_first_candidate() {
        let body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        })
        .to_string();

        assert_eq!(extract_answer(&body).unwrap(), "first");
    }

    #[test]
    fn test_extract_answer_missing_candidates() {
        let err = extract_answer("{}").unwrap_err();
        assert!(matches!(err, IngresError::MalformedGeneration(_)));
    }

    #[test]
    fn test_extract_answer_empty_text() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        })
        .to_string();

        let err = extract_answer(&body).unwrap_err();
        assert!(matches!(err, IngresError::MalformedGeneration(_)));
    }

    #[test]
    fn test_extract_answer_unparseable_body() {
        let err = extract_answer("model overloaded, try later").unwrap_err();
        assert!(matches!(err, IngresError::MalformedGeneration(_)));
    }
}
