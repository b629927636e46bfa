use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Synthetic agent reply appended when a chat request fails.
pub const AGENT_UNREACHABLE: &str = "Error: Could not reach the agent.";

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// A single entry of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Local time the message was appended (display only)
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Agent)
    }

    /// The fixed message shown when the agent could not be reached.
    pub fn agent_unreachable() -> Self {
        Self::agent(AGENT_UNREACHABLE)
    }
}
