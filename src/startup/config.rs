//! Runtime configuration.
//!
//! Precedence is CLI flags over environment over defaults:
//!
//! ```ignore
//! use newsdeck::startup::DeckConfig;
//!
//! let config = DeckConfig::from_env().apply_cli(&overrides);
//! ```

use std::time::Duration;

use crate::agent::DEFAULT_BASE_URL;
use crate::cli::CliOverrides;
use crate::state::{ViewId, STATUS_TIMEOUT};

pub const ENV_URL: &str = "NEWSDECK_URL";
pub const ENV_CANCEL_STALE: &str = "NEWSDECK_CANCEL_STALE";
pub const ENV_LOG: &str = "NEWSDECK_LOG";
pub const ENV_TIMEOUT_SECS: &str = "NEWSDECK_TIMEOUT_SECS";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Agent service base URL (default: http://localhost:8000)
    pub base_url: String,
    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,
    /// How long status messages stay visible (default: 3000 ms)
    pub status_timeout: Duration,
    /// Drop feed and config loads for views the user left
    pub cancel_stale_requests: bool,
    /// View active at startup
    pub initial_view: ViewId,
    /// tracing filter directive
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            status_timeout: STATUS_TIMEOUT,
            cancel_stale_requests: false,
            initial_view: ViewId::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn with_cancel_stale_requests(mut self, enabled: bool) -> Self {
        self.cancel_stale_requests = enabled;
        self
    }

    pub fn with_initial_view(mut self, view: ViewId) -> Self {
        self.initial_view = view;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `NEWSDECK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    /// Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        if let Some(flag) = lookup(ENV_CANCEL_STALE) {
            config = config.with_cancel_stale_requests(is_truthy(&flag));
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Apply command-line overrides on top.
    pub fn apply_cli(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.base_url {
            self = self.with_base_url(url.as_str());
        }
        if overrides.cancel_stale {
            self = self.with_cancel_stale_requests(true);
        }
        if let Some(view) = overrides.initial_view {
            self = self.with_initial_view(view);
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.status_timeout, Duration::from_millis(3000));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.cancel_stale_requests);
        assert_eq!(config.initial_view, ViewId::Chat);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_builder() {
        let config = DeckConfig::new()
            .with_base_url("http://agent:9000")
            .with_status_timeout(Duration::from_millis(10))
            .with_cancel_stale_requests(true)
            .with_initial_view(ViewId::Feed);
        assert_eq!(config.base_url, "http://agent:9000");
        assert_eq!(config.status_timeout, Duration::from_millis(10));
        assert!(config.cancel_stale_requests);
        assert_eq!(config.initial_view, ViewId::Feed);
    }

    #[test]
    fn test_from_lookup() {
        let config = DeckConfig::from_lookup(lookup_from(&[
            (ENV_URL, " http://remote:8000 "),
            (ENV_CANCEL_STALE, "true"),
            (ENV_LOG, "newsdeck=debug"),
            (ENV_TIMEOUT_SECS, "5"),
        ]));
        assert_eq!(config.base_url, "http://remote:8000");
        assert!(config.cancel_stale_requests);
        assert_eq!(config.log_filter, "newsdeck=debug");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = DeckConfig::from_lookup(lookup_from(&[
            (ENV_URL, "  "),
            (ENV_CANCEL_STALE, "nope"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_cli_wins_over_env() {
        let env = DeckConfig::from_lookup(lookup_from(&[(ENV_URL, "http://env:1")]));
        let overrides = CliOverrides {
            base_url: Some("http://cli:2".to_string()),
            cancel_stale: true,
            initial_view: Some(ViewId::Settings),
        };
        let config = env.apply_cli(&overrides);
        assert_eq!(config.base_url, "http://cli:2");
        assert!(config.cancel_stale_requests);
        assert_eq!(config.initial_view, ViewId::Settings);
    }

    #[test]
    fn test_empty_cli_keeps_env() {
        let env = DeckConfig::from_lookup(lookup_from(&[(ENV_CANCEL_STALE, "1")]));
        let config = env.clone().apply_cli(&CliOverrides::default());
        assert_eq!(config, env);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_URL, "http://from-env:8000");
        std::env::set_var(ENV_CANCEL_STALE, "1");
        let config = DeckConfig::from_env();
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_CANCEL_STALE);

        assert_eq!(config.base_url, "http://from-env:8000");
        assert!(config.cancel_stale_requests);
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables() {
        for key in [ENV_URL, ENV_CANCEL_STALE, ENV_LOG, ENV_TIMEOUT_SECS] {
            std::env::remove_var(key);
        }
        assert_eq!(DeckConfig::from_env(), DeckConfig::default());
    }
}
