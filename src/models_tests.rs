//! Unit tests for the chat wire models

#[cfg(test)]
mod tests {
    use crate::models::*;

    #[test]
    fn test_chat_request_default_n_results() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "groundwater in Punjab"}"#).unwrap();

        assert_eq!(req.query, "groundwater in Punjab");
        assert_eq!(req.n_results, 5);
    }

    #[test]
    fn test_chat_request_explicit_n_results() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"query": "q", "n_results": 12}"#).unwrap();

        assert_eq!(req.n_results, 12);
    }

    #[test]
    fn test_chat_request_rejects_missing_query() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"n_results": 3}"#).is_err());
    }

    #[test]
    fn test_chat_response_shape() {
        let response = ChatResponse::success("the query", "the answer");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["query"], "the query");
        assert_eq!(json["response"], "the answer");
    }
}
