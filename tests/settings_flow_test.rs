//! Configuration load and save flows against a mock agent service.

mod common;

use common::{pump, url, TestAppBuilder};
use newsdeck::adapters::MockResponse;
use newsdeck::agent::CONFIG_PATH;
use newsdeck::state::{StatusKind, ViewId};
use newsdeck::traits::{HttpError, Response};
use serde_json::json;

#[tokio::test]
async fn test_selecting_settings_loads_config() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::json(200, json!({"config": "feeds:\n  - https://a.example/rss\n"})),
    );

    app.select_view(ViewId::Settings);
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(app.settings.contents(), "feeds:\n  - https://a.example/rss\n");
    assert!(!app.settings.is_dirty());
}

#[tokio::test]
async fn test_load_failure_keeps_buffer() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::Error(HttpError::Timeout("30s".to_string())),
    );
    app.settings.buffer.insert_str("draft: true");

    app.select_view(ViewId::Settings);
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(app.settings.contents(), "draft: true");
    assert!(!app.status.is_visible());
}

#[tokio::test]
async fn test_save_success() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::json(200, json!({"status": "success"})),
    );
    app.settings.buffer.insert_str("feeds: []");
    assert!(app.settings.is_dirty());

    app.save_config();
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(
        app.status.current(),
        Some(("Configuration saved successfully.", StatusKind::Success))
    );
    assert_eq!(app.status.class_name(), "status-bar success");
    assert!(!app.settings.is_dirty());
    let requests = mock.requests_to(CONFIG_PATH);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].json_body(), Some(json!({"config": "feeds: []"})));
}

#[tokio::test]
async fn test_save_rejected_shows_detail() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::json(400, json!({"detail": "bad syntax"})),
    );

    app.save_config();
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(
        app.status.current(),
        Some(("Error: bad syntax", StatusKind::Error))
    );
    assert_eq!(app.status.class_name(), "status-bar error");
}

#[tokio::test]
async fn test_save_rejected_without_detail_shows_status() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::json(500, json!({"error": "boom"})),
    );

    app.save_config();
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(
        app.status.current(),
        Some(("Error: HTTP 500", StatusKind::Error))
    );
}

#[tokio::test]
async fn test_save_structured_detail_rendered_as_json() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(
        &url(CONFIG_PATH),
        MockResponse::json(422, json!({"detail": [{"msg": "field required"}]})),
    );

    app.save_config();
    pump(&mut app, &mut rx, 1).await;

    let (text, kind) = app.status.current().unwrap();
    assert_eq!(kind, StatusKind::Error);
    assert_eq!(text, r#"Error: [{"msg":"field required"}]"#);
}

#[tokio::test]
async fn test_save_network_failures() {
    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.queue_response(
        &url(CONFIG_PATH),
        MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
    );
    mock.queue_response(
        &url(CONFIG_PATH),
        MockResponse::Success(Response::new(502, "<html>Bad Gateway</html>")),
    );

    for _ in 0..2 {
        app.save_config();
        pump(&mut app, &mut rx, 1).await;
        assert_eq!(
            app.status.current(),
            Some(("Network error.", StatusKind::Error))
        );
    }
}

#[tokio::test]
async fn test_ctrl_s_saves_editor_content() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let (mut app, mock, mut rx) = TestAppBuilder::new().build();
    mock.set_response(&url(CONFIG_PATH), MockResponse::json(200, json!({"config": "a: 1"})));

    app.handle_key(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE));
    pump(&mut app, &mut rx, 1).await;

    app.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    pump(&mut app, &mut rx, 1).await;

    let posts: Vec<_> = mock
        .requests_to(CONFIG_PATH)
        .into_iter()
        .filter(|r| r.method == "POST")
        .collect();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].json_body(), Some(json!({"config": "a: 10"})));
}
