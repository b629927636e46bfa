//! Configuration load and save for the App.

use std::sync::Arc;

use super::cancel::until_cancelled;
use super::{App, AppMessage};
use crate::state::ViewId;

impl App {
    /// Fetch the configuration into the editor.
    pub fn load_config(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let token = self.cancellation.token_for(ViewId::Settings);
        tokio::spawn(async move {
            match until_cancelled(token, client.fetch_config()).await {
                Some(result) => {
                    let _ = tx.send(AppMessage::ConfigLoaded(result));
                }
                None => tracing::debug!("Config load dropped, settings view was left"),
            }
        });
    }

    /// Store the editor buffer on the server.
    pub fn save_config(&mut self) {
        let content = self.settings.contents();
        tracing::debug!("Saving configuration ({} bytes)", content.len());

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.save_config(&content).await;
            let _ = tx.send(AppMessage::ConfigSaved { content, result });
        });
    }
}
