//! Responsive layout context.
//!
//! Render functions receive a [`LayoutContext`] to decide how much chrome
//! fits on the current terminal.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Narrow enough to drop labels down to their short form.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Usable width inside borders on both sides.
    pub fn content_width(&self, border_width: u16) -> u16 {
        self.width.saturating_sub(border_width * 2)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
