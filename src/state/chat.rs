//! Chat transcript and input line.

use crate::error::NetworkError;
use crate::models::ChatMessage;
use crate::widgets::TextAreaInput;

const INPUT_PLACEHOLDER: &str = "Type a message and press Enter";

#[derive(Debug, Clone)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Input line being composed
    pub input: TextAreaInput,
    /// Lines scrolled back from the newest message; 0 follows the tail
    scroll_back: u16,
    in_flight: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: TextAreaInput::new().with_placeholder(INPUT_PLACEHOLDER),
            scroll_back: 0,
            in_flight: 0,
        }
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of sends still waiting for a reply.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Take the trimmed input for sending.
    ///
    /// Returns `None` for blank input and leaves the transcript alone.
    /// Otherwise appends the user message, clears the input and returns
    /// the text to post.
    pub fn take_outgoing(&mut self) -> Option<String> {
        let text = self.input.content().trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.in_flight += 1;
        self.scroll_back = 0;
        Some(text)
    }

    /// Append the outcome of one send: the agent's reply, or the fixed
    /// unreachable message for any failure.
    pub fn apply_reply(&mut self, result: Result<String, NetworkError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(reply) => self.messages.push(ChatMessage::agent(reply)),
            Err(err) => {
                tracing::warn!("Chat request failed [{}]: {}", err.error_code(), err);
                self.messages.push(ChatMessage::agent_unreachable());
            }
        }
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let limit = self.line_estimate();
        self.scroll_back = self.scroll_back.saturating_add(lines).min(limit);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Upper bound for scrolling: one header line plus the text lines of
    /// each message.
    fn line_estimate(&self) -> u16 {
        let lines: usize = self
            .messages
            .iter()
            .map(|m| 1 + m.text.lines().count().max(1))
            .sum();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}
