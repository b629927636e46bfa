//! Settings editor view model.

use crate::error::NetworkError;
use crate::state::status::StatusKind;
use crate::widgets::TextAreaInput;

pub const SAVE_SUCCESS_TEXT: &str = "Configuration saved successfully.";
pub const NETWORK_ERROR_TEXT: &str = "Network error.";

#[derive(Debug, Clone, Default)]
pub struct ConfigEditorState {
    pub buffer: TextAreaInput,
    /// Content last loaded from or saved to the server
    baseline: Option<String>,
}

impl ConfigEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.content()
    }

    /// Populate the buffer from a load. Failures leave it untouched.
    pub fn apply_loaded(&mut self, result: Result<String, NetworkError>) {
        match result {
            Ok(config) => {
                self.buffer.set_content(&config);
                tracing::debug!(
                    "Loaded configuration ({} bytes, {} lines)",
                    config.len(),
                    self.buffer.lines().len()
                );
                // Compare against the editor's normalized form so CRLF
                // input is not dirty on load
                self.baseline = Some(self.buffer.content());
            }
            Err(err) => {
                tracing::warn!("Config load failed [{}]: {}", err.error_code(), err);
            }
        }
    }

    /// Record `content` as stored after a successful save.
    pub fn mark_saved(&mut self, content: String) {
        self.baseline = Some(content);
    }

    /// True when the buffer differs from what the server last had.
    pub fn is_dirty(&self) -> bool {
        match &self.baseline {
            Some(baseline) => *baseline != self.buffer.content(),
            None => !self.buffer.is_blank(),
        }
    }
}

/// Status message for a save outcome.
///
/// A non-2xx JSON response shows its detail, or `HTTP <status>` without
/// one. Transport failures and non-JSON bodies are a network error.
pub fn save_outcome(result: &Result<(), NetworkError>) -> (String, StatusKind) {
    match result {
        Ok(()) => (SAVE_SUCCESS_TEXT.to_string(), StatusKind::Success),
        Err(err) => match err.detail() {
            Some(detail) => (format!("Error: {}", detail), StatusKind::Error),
            None => (NETWORK_ERROR_TEXT.to_string(), StatusKind::Error),
        },
    }
}
