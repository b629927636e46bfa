//! Application state and logic for the TUI.
//!
//! [`App`] owns every view model. User input and background task results
//! both arrive on the event loop and mutate state only through `&mut App`:
//! - `input` maps key events to operations
//! - `chat`, `feed`, `settings` start the remote calls
//! - `handlers` applies [`AppMessage`]s sent back by those calls

mod cancel;
mod chat;
mod feed;
mod handlers;
mod input;
mod messages;
mod navigation;
mod settings;
mod status;

pub use cancel::ViewCancellation;
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::agent::AgentClient;
use crate::error::{DeckError, DeckResult};
use crate::startup::DeckConfig;
use crate::state::{ChatState, ConfigEditorState, FeedState, StatusReporter, ViewController};
use crate::traits::HttpClient;

pub struct App {
    /// Which surface is shown
    pub views: ViewController,
    pub chat: ChatState,
    pub feed: FeedState,
    pub settings: ConfigEditorState,
    pub status: StatusReporter,
    /// Client for the agent service, shared with spawned tasks
    pub client: Arc<AgentClient>,
    pub config: DeckConfig,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    cancellation: ViewCancellation,
}

impl App {
    /// Create an App talking to `config.base_url` over reqwest.
    pub fn new(config: DeckConfig) -> DeckResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .map_err(|e| DeckError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self::with_http_client(config, Arc::new(http)))
    }

    /// Create an App over any HTTP transport.
    pub fn with_http_client(config: DeckConfig, http: Arc<dyn HttpClient>) -> Self {
        let client = Arc::new(AgentClient::new(config.base_url.clone(), http));
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            views: ViewController::new(config.initial_view),
            chat: ChatState::new(),
            feed: FeedState::new(),
            settings: ConfigEditorState::new(),
            status: StatusReporter::new(),
            client,
            cancellation: ViewCancellation::new(config.cancel_stale_requests),
            config,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Busy indicators animate
        if self.chat.in_flight() > 0 || !self.feed.refresh.is_enabled() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
