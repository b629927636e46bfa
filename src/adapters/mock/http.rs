//! Mock HTTP client for testing.
//!
//! Returns canned responses per URL and records every request so tests can
//! assert on what the dashboard sent.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (POST only)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait before resolving the inner response
    Delayed {
        delay: Duration,
        response: Box<MockResponse>,
    },
    /// Panic inside the request future (simulates an aborted task)
    Panic(String),
}

impl MockResponse {
    /// A JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// Wrap this response so it resolves after `delay`.
    pub fn delayed(self, delay: Duration) -> Self {
        MockResponse::Delayed {
            delay,
            response: Box::new(self),
        }
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for a URL: queued one-shot responses, then the sticky
/// response set with [`MockHttpClient::set_response`] (exact match, then
/// prefix match), then the default response.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:8000/api/chat",
///     MockResponse::json(200, serde_json::json!({"response": "hello"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response returned for every request to `url`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response for `url`, consumed before the sticky one.
    pub fn queue_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests whose URL ends with `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.url.ends_with(path))
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(url) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        self.default_response.lock().unwrap().clone()
    }

    async fn resolve(url: &str, response: Option<MockResponse>) -> Result<Response, HttpError> {
        let mut next = response;
        loop {
            match next {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed { delay, response }) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*response);
                }
                Some(MockResponse::Panic(message)) => panic!("{}", message),
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for URL: {}",
                        url
                    )))
                }
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        let response = self.get_response(url);
        Self::resolve(url, response).await
    }

    async fn post(
        &self,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, body.map(str::to_string));
        let response = self.get_response(url);
        Self::resolve(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/api/articles",
            MockResponse::Success(Response::new(200, "[]")),
        );

        let response = client
            .get("http://test/api/articles", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://test/api/articles");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_post_records_body() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/api/chat",
            MockResponse::json(200, serde_json::json!({"response": "ok"})),
        );

        client
            .post("http://test/api/chat", Some(r#"{"message":"hi"}"#), &Headers::new())
            .await
            .unwrap();

        let requests = client.requests_to("/api/chat");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].json_body(),
            Some(serde_json::json!({"message": "hi"}))
        );
    }

    #[tokio::test]
    async fn test_queued_responses_take_priority_then_fall_back() {
        let client = MockHttpClient::new();
        client.set_response("http://test/x", MockResponse::Success(Response::new(200, "sticky")));
        client.queue_response("http://test/x", MockResponse::Success(Response::new(201, "first")));

        let first = client.get("http://test/x", &Headers::new()).await.unwrap();
        let second = client.get("http://test/x", &Headers::new()).await.unwrap();

        assert_eq!(first.status, 201);
        assert_eq!(second.status, 200);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/api/config",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://test/api/config", &Headers::new()).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/slow",
            MockResponse::Success(Response::new(200, "late")).delayed(Duration::from_secs(2)),
        );

        let start = tokio::time::Instant::now();
        let response = client.get("http://test/slow", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("http://test/missing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_prefix_match_and_shared_clone() {
        let client = MockHttpClient::new();
        client.set_response("http://test/api", MockResponse::Success(Response::new(200, "")));

        let cloned = client.clone();
        let response = cloned
            .get("http://test/api/articles", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(client.get_requests().len(), 1);
    }
}
