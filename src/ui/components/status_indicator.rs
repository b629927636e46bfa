//! Status Indicator Component
//!
//! Spinner shown next to in-flight work (chat replies, ingestion).

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16 ms loop tick
const TICKS_PER_FRAME: u64 = 6;

/// Get the spinner character for an app tick count
pub fn get_spinner_char(tick: u64) -> char {
    let frame = (tick / TICKS_PER_FRAME) as usize;
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// A one-line busy indicator: spinner then message.
pub fn render_busy_indicator(message: &str, tick: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(tick)),
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(COLOR_DIM)),
    ])
}
