//! newsdeck - a terminal dashboard for the news agent service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod agent;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
