//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, mock, mut rx) = TestAppBuilder::new().build();
//! mock.set_response(&url(ARTICLES_PATH), MockResponse::json(200, json!([])));
//! app.select_view(ViewId::Feed);
//! pump(&mut app, &mut rx, 1).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use newsdeck::adapters::MockHttpClient;
use newsdeck::app::{App, AppMessage};
use newsdeck::startup::DeckConfig;
use newsdeck::state::ViewId;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub const BASE_URL: &str = "http://agent.test";

/// How long `pump` waits for each message.
pub const PUMP_TIMEOUT: Duration = Duration::from_secs(5);

/// Absolute mock URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// Article JSON as the server sends it.
pub fn article_json(title: &str, score: Option<&str>) -> Value {
    json!({
        "id": 1,
        "title": title,
        "url": format!("https://news.example/{}", title.to_lowercase().replace(' ', "-")),
        "summary": format!("Summary of {}", title),
        "category": "Tech",
        "published_date": "2024-05-01",
        "relevance_score": score,
        "tags": ["ai"],
        "image_url": null
    })
}

/// Builder for App instances backed by a [`MockHttpClient`].
pub struct TestAppBuilder {
    config: DeckConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            // Long enough that hide timers never fire unless a test waits
            config: DeckConfig::default()
                .with_base_url(BASE_URL)
                .with_status_timeout(Duration::from_secs(600)),
        }
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.config.status_timeout = timeout;
        self
    }

    pub fn with_cancel_stale_requests(mut self) -> Self {
        self.config.cancel_stale_requests = true;
        self
    }

    pub fn with_initial_view(mut self, view: ViewId) -> Self {
        self.config.initial_view = view;
        self
    }

    /// App, its mock transport and the message receiver taken from it.
    pub fn build(self) -> (App, MockHttpClient, UnboundedReceiver<AppMessage>) {
        let mock = MockHttpClient::new();
        let mut app = App::with_http_client(self.config, Arc::new(mock.clone()));
        let rx = app.message_rx.take().expect("fresh app has a receiver");
        (app, mock, rx)
    }
}

/// Receive and apply `count` messages, the way the event loop does.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for i in 0..count {
        let msg = tokio::time::timeout(PUMP_TIMEOUT, rx.recv())
            .await
            .unwrap_or_else(|_| panic!("timed out waiting for message {} of {}", i + 1, count))
            .expect("message channel closed");
        app.handle_message(msg);
    }
}

/// Assert nothing arrives within `wait`.
pub async fn assert_quiet(rx: &mut UnboundedReceiver<AppMessage>, wait: Duration) {
    if let Ok(msg) = tokio::time::timeout(wait, rx.recv()).await {
        panic!("unexpected message: {:?}", msg);
    }
}
