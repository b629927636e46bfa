//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal view switcher with arrow marker
//! - `StatusIndicator` - Spinner for in-flight work

mod status_indicator;
mod tab_selector;

pub use status_indicator::{get_spinner_char, render_busy_indicator};
pub use tab_selector::{render_tab_selector, TabItem};
