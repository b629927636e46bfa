//! Transient status notifications.
//!
//! Every [`StatusReporter::show`] hands out a [`StatusTicket`]; the app
//! schedules one hide timer per ticket. Expiring any ticket hides whatever
//! is currently shown, so an older timer can cut a newer message short.
//! Timers are never cancelled or reset.

use std::time::Duration;

/// How long a status message stays visible.
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Identifies one `show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatusTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReporter {
    message: String,
    kind: StatusKind,
    visible: bool,
    issued: u64,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            kind: StatusKind::Success,
            visible: false,
            issued: 0,
        }
    }

    /// Show `message` styled by `kind`. The caller owns the hide timer.
    pub fn show(&mut self, message: impl Into<String>, kind: StatusKind) -> StatusTicket {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.issued += 1;
        StatusTicket(self.issued)
    }

    /// Hide the bar when `ticket`'s timer fires.
    ///
    /// Returns true if a newer message was hidden early.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        let cut_short = self.visible && ticket.0 < self.issued;
        self.visible = false;
        cut_short
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Style class of the bar, e.g. `status-bar error`.
    pub fn class_name(&self) -> String {
        format!("status-bar {}", self.kind.as_str())
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<(&str, StatusKind)> {
        self.visible.then_some((self.message.as_str(), self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_text_and_class() {
        let mut status = StatusReporter::new();
        assert!(status.current().is_none());

        status.show("Configuration saved successfully.", StatusKind::Success);
        assert_eq!(
            status.current(),
            Some(("Configuration saved successfully.", StatusKind::Success))
        );
        assert_eq!(status.class_name(), "status-bar success");
    }

    #[test]
    fn test_expire_hides() {
        let mut status = StatusReporter::new();
        let ticket = status.show("Network error.", StatusKind::Error);
        assert!(!status.expire(ticket));
        assert!(!status.is_visible());
    }

    #[test]
    fn test_older_timer_hides_newer_message() {
        let mut status = StatusReporter::new();
        let first = status.show("one", StatusKind::Success);
        let second = status.show("two", StatusKind::Error);
        assert!(second > first);

        assert!(status.expire(first));
        assert!(!status.is_visible());
        assert!(!status.expire(second));
    }

    #[test]
    fn test_show_after_hide_is_visible_again() {
        let mut status = StatusReporter::new();
        let ticket = status.show("one", StatusKind::Success);
        status.expire(ticket);
        let second = status.show("two", StatusKind::Success);
        assert!(status.is_visible());
        assert_eq!(second, StatusTicket(2));
    }
}
