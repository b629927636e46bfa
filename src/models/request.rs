//! Request and response payloads of the agent service API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST /api/chat`. The server also returns the matched
/// articles; the dashboard only shows the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Response of `POST /api/ingest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestResponse {
    pub new_articles: u64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `POST /api/config` and response of `GET /api/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigPayload {
    pub config: String,
}

/// Error body of a non-2xx response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Detail as display text. Strings are used verbatim, structured
    /// details (validation error lists) as compact JSON.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_ignores_articles() {
        let json = r#"{"response": "hello", "articles": [{"title": "x"}]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "hello");
    }

    #[test]
    fn test_ingest_response() {
        let resp: IngestResponse =
            serde_json::from_str(r#"{"status": "success", "new_articles": 5}"#).unwrap();
        assert_eq!(resp.new_articles, 5);
        assert_eq!(resp.status.as_deref(), Some("success"));
    }

    #[test]
    fn test_error_body_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "bad syntax"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("bad syntax"));
    }

    #[test]
    fn test_error_body_structured_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#)
                .unwrap();
        let text = body.detail_text().unwrap();
        assert!(text.contains("field required"));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(body.detail_text(), None);
        let body: ErrorBody = serde_json::from_str(r#"{"detail": null}"#).unwrap();
        assert_eq!(body.detail_text(), None);
    }
}
