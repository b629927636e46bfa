//! Agent service API client.
//!
//! Maps the five endpoints of the news agent backend onto typed calls over
//! any [`HttpClient`]:
//!
//! | Call | Method |
//! |---|---|
//! | `POST /api/chat` | [`AgentClient::chat`] |
//! | `GET /api/articles` | [`AgentClient::fetch_articles`] |
//! | `POST /api/ingest` | [`AgentClient::ingest`] |
//! | `GET /api/config` | [`AgentClient::fetch_config`] |
//! | `POST /api/config` | [`AgentClient::save_config`] |
//!
//! No call retries. Each failure comes back as a [`NetworkError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::NetworkError;
use crate::models::{
    Article, ChatRequest, ChatResponse, ConfigPayload, ErrorBody, IngestResponse,
};
use crate::traits::{json_headers, Headers, HttpClient, Response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const CHAT_PATH: &str = "/api/chat";
pub const ARTICLES_PATH: &str = "/api/articles";
pub const INGEST_PATH: &str = "/api/ingest";
pub const CONFIG_PATH: &str = "/api/config";

/// Client for the agent service.
///
/// Cheap to share behind an `Arc`; every async task gets its own clone.
pub struct AgentClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for AgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AgentClient {
    /// Create a client for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a chat message and return the agent's reply text.
    pub async fn chat(&self, message: &str) -> Result<String, NetworkError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        let response: ChatResponse = self.post_json(CHAT_PATH, &request).await?;
        Ok(response.response)
    }

    /// Fetch the full article list in server order.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, NetworkError> {
        let url = self.url(ARTICLES_PATH);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        decode(&response)
    }

    /// Trigger ingestion and return the number of newly stored articles.
    pub async fn ingest(&self) -> Result<u64, NetworkError> {
        let url = self.url(INGEST_PATH);
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url, None, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        let body: IngestResponse = decode(&response)?;
        Ok(body.new_articles)
    }

    /// Fetch the raw configuration blob.
    pub async fn fetch_config(&self) -> Result<String, NetworkError> {
        let url = self.url(CONFIG_PATH);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        let body: ConfigPayload = decode(&response)?;
        Ok(body.config)
    }

    /// Store the raw configuration blob.
    ///
    /// Any 2xx is success regardless of body. A non-2xx response yields
    /// [`NetworkError::HttpStatus`] carrying the server's `detail`.
    pub async fn save_config(&self, config: &str) -> Result<(), NetworkError> {
        let url = self.url(CONFIG_PATH);
        let body = encode(&ConfigPayload {
            config: config.to_string(),
        })?;
        tracing::debug!("POST {} ({} bytes)", url, config.len());
        let response = self
            .http
            .post(&url, Some(&body), &json_headers())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        if response.is_success() {
            Ok(())
        } else {
            Err(status_error(&response))
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, NetworkError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = encode(body)?;
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url, Some(&body), &json_headers())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        decode(&response)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, NetworkError> {
    serde_json::to_string(body).map_err(|e| NetworkError::Other {
        message: format!("Failed to encode request: {}", e),
    })
}

/// Decode a 2xx JSON body, or classify a non-2xx response.
fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, NetworkError> {
    if !response.is_success() {
        return Err(status_error(response));
    }
    response.json().map_err(|e| NetworkError::InvalidResponse {
        message: format!("Failed to decode response: {}", e),
    })
}

/// Classify a non-2xx response.
///
/// Any JSON body makes it an `HttpStatus`, carrying `detail` when present
/// and `HTTP <status>` otherwise. A body that is not JSON is unreadable.
fn status_error(response: &Response) -> NetworkError {
    let Ok(body) = response.json::<serde_json::Value>() else {
        return NetworkError::InvalidResponse {
            message: format!(
                "HTTP {} with a non-JSON body: {}",
                response.status,
                response.text_lossy()
            ),
        };
    };
    let detail = serde_json::from_value::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_text())
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    NetworkError::HttpStatus {
        status: response.status,
        detail,
    }
}
