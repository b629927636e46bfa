//! Color theme constants for the newsdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Busy indicators
pub const COLOR_ACTIVE: Color = Color::LightGreen;

// ============================================================================
// Status Bar
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Text on top of a colored status bar
pub const COLOR_STATUS_TEXT: Color = Color::Black;

// ============================================================================
// Chat
// ============================================================================

pub const COLOR_USER: Color = Color::Rgb(0, 122, 204); // blue #007ACC

pub const COLOR_AGENT: Color = Color::Cyan;

// ============================================================================
// Relevance Badges
// ============================================================================

pub const COLOR_RELEVANCE_HIGH: Color = Color::Rgb(220, 80, 60);

pub const COLOR_RELEVANCE_MEDIUM: Color = Color::Rgb(230, 170, 40);

pub const COLOR_RELEVANCE_LOW: Color = Color::Gray;

/// Article tags
pub const COLOR_TAG: Color = Color::Magenta;
