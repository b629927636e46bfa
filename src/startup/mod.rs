//! Startup configuration.
//!
//! - [`config`] - [`DeckConfig`] with builder, environment and CLI layers

pub mod config;

pub use config::DeckConfig;
