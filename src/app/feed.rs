//! Feed loading, ingestion and link opening for the App.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::cancel::until_cancelled;
use super::{App, AppMessage};
use crate::error::NetworkError;
use crate::state::ViewId;

/// Sends `IngestFinished` exactly once, even if the ingest task is aborted
/// or panics before reporting.
struct IngestGuard {
    tx: mpsc::UnboundedSender<AppMessage>,
    sent: bool,
}

impl IngestGuard {
    fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx, sent: false }
    }

    fn finish(mut self, result: Result<u64, NetworkError>) {
        self.sent = true;
        let _ = self.tx.send(AppMessage::IngestFinished(result));
    }
}

impl Drop for IngestGuard {
    fn drop(&mut self) {
        if !self.sent {
            tracing::warn!("Ingest task ended without a result");
            let _ = self.tx.send(AppMessage::IngestFinished(Err(NetworkError::Cancelled)));
        }
    }
}

impl App {
    /// Show the loading placeholder and fetch the article list.
    pub fn load_articles(&mut self) {
        self.feed.begin_load();
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let token = self.cancellation.token_for(ViewId::Feed);
        tokio::spawn(async move {
            match until_cancelled(token, client.fetch_articles()).await {
                Some(result) => {
                    let _ = tx.send(AppMessage::ArticlesLoaded(result));
                }
                None => tracing::debug!("Article load dropped, feed view was left"),
            }
        });
    }

    /// Trigger ingestion on the server.
    ///
    /// Ignored while a previous refresh is still running. The control is
    /// re-enabled when `IngestFinished` is handled.
    pub fn refresh_feeds(&mut self) {
        if !self.feed.refresh.begin() {
            tracing::debug!("Refresh ignored, ingestion already running");
            return;
        }
        self.mark_dirty();
        tracing::info!("Starting feed ingestion");

        let client = Arc::clone(&self.client);
        let guard = IngestGuard::new(self.message_tx.clone());
        tokio::spawn(async move {
            let result = client.ingest().await;
            guard.finish(result);
        });
    }

    /// Open the selected article in the system browser.
    pub fn open_selected_article(&mut self) {
        let Some(card) = self.feed.selected_card() else {
            return;
        };
        if card.url.is_empty() {
            tracing::debug!("Selected article has no URL");
            return;
        }
        let url = card.url.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open {}: {}", url, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sends_once_on_finish() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        IngestGuard::new(tx).finish(Ok(3));

        assert!(matches!(rx.try_recv(), Ok(AppMessage::IngestFinished(Ok(3)))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_guard_reports_when_dropped_early() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(IngestGuard::new(tx));

        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::IngestFinished(Err(NetworkError::Cancelled)))
        ));
        assert!(rx.try_recv().is_err());
    }
}
