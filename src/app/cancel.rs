//! Per-view cancellation of stale loads.
//!
//! Off by default: every request runs to completion and its result is
//! applied even if the user has moved on. When enabled, each view owns a
//! [`CancellationToken`]; leaving the view cancels it and installs a fresh
//! one. Only feed and config loads observe these tokens.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::state::ViewId;

#[derive(Debug)]
pub struct ViewCancellation {
    enabled: bool,
    tokens: [CancellationToken; 3],
}

impl ViewCancellation {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            tokens: Default::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Token for a load owned by `view`, or `None` when disabled.
    pub fn token_for(&self, view: ViewId) -> Option<CancellationToken> {
        self.enabled.then(|| self.tokens[view.index()].clone())
    }

    /// Cancel everything `view` has in flight.
    pub fn deactivate(&mut self, view: ViewId) {
        if !self.enabled {
            return;
        }
        let slot = &mut self.tokens[view.index()];
        slot.cancel();
        *slot = CancellationToken::new();
        tracing::debug!("Cancelled pending loads for {} view", view);
    }
}

/// Run `fut` unless `token` is cancelled first.
pub(crate) async fn until_cancelled<F>(token: Option<CancellationToken>, fut: F) -> Option<F::Output>
where
    F: Future,
{
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => None,
            output = fut => Some(output),
        },
        None => Some(fut.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_hands_out_no_tokens() {
        let mut cancel = ViewCancellation::new(false);
        assert!(cancel.token_for(ViewId::Feed).is_none());
        cancel.deactivate(ViewId::Feed);
        assert!(!cancel.is_enabled());
    }

    #[test]
    fn test_deactivate_cancels_and_replaces() {
        let mut cancel = ViewCancellation::new(true);
        let feed = cancel.token_for(ViewId::Feed).unwrap();
        let settings = cancel.token_for(ViewId::Settings).unwrap();

        cancel.deactivate(ViewId::Feed);

        assert!(feed.is_cancelled());
        assert!(!settings.is_cancelled());
        assert!(!cancel.token_for(ViewId::Feed).unwrap().is_cancelled());
    }

    #[tokio::test]
    async fn test_until_cancelled() {
        assert_eq!(until_cancelled(None, async { 1 }).await, Some(1));

        let token = CancellationToken::new();
        assert_eq!(until_cancelled(Some(token.clone()), async { 2 }).await, Some(2));

        token.cancel();
        let pending = std::future::pending::<i32>();
        assert_eq!(until_cancelled(Some(token), pending).await, None);
    }
}
