//! Status notifications for the App.

use super::{App, AppMessage};
use crate::state::StatusKind;

impl App {
    /// Show a status message and schedule its hide timer.
    ///
    /// Each call gets its own timer, started now; none is ever cancelled.
    pub fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        let message = message.into();
        match kind {
            StatusKind::Success => tracing::info!("Status: {}", message),
            StatusKind::Error => tracing::warn!("Status: {}", message),
        }
        let ticket = self.status.show(message, kind);
        self.mark_dirty();

        let tx = self.message_tx.clone();
        let deadline = tokio::time::Instant::now() + self.config.status_timeout;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(AppMessage::StatusExpired(ticket));
        });
    }
}
