//! Message handling for the App.

use super::{App, AppMessage};
use crate::state::{ingest_outcome, save_outcome};

impl App {
    /// Handle an incoming async message.
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ChatReply(result) => {
                self.chat.apply_reply(result);
            }
            AppMessage::ArticlesLoaded(result) => {
                self.feed.apply_articles(result);
            }
            AppMessage::IngestFinished(result) => {
                self.feed.refresh.finish();
                let (text, kind) = ingest_outcome(&result);
                self.show_status(text, kind);
                match result {
                    Ok(_) => self.load_articles(),
                    Err(e) => tracing::warn!("Ingestion failed [{}]: {}", e.error_code(), e),
                }
            }
            AppMessage::ConfigLoaded(result) => {
                self.settings.apply_loaded(result);
            }
            AppMessage::ConfigSaved { content, result } => {
                if result.is_ok() {
                    self.settings.mark_saved(content);
                }
                let (text, kind) = save_outcome(&result);
                self.show_status(text, kind);
            }
            AppMessage::StatusExpired(ticket) => {
                if self.status.expire(ticket) {
                    tracing::debug!("Status timer {:?} hid a newer message early", ticket);
                }
            }
        }
    }
}
