//! Chat sending for the App.

use std::sync::Arc;

use super::{App, AppMessage};

impl App {
    /// Send the input line to the agent.
    ///
    /// Blank input does nothing. Otherwise the user message is appended
    /// before the request is spawned; the reply (or the unreachable
    /// message) arrives later as [`AppMessage::ChatReply`]. Concurrent sends
    /// are not ordered against each other.
    pub fn send_message(&mut self) {
        let Some(text) = self.chat.take_outgoing() else {
            return;
        };
        self.mark_dirty();
        tracing::debug!("Sending chat message ({} chars)", text.chars().count());

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.chat(&text).await;
            let _ = tx.send(AppMessage::ChatReply(result));
        });
    }
}
