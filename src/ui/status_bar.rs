//! Status bar: one row, colored by message kind, blank when hidden.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ERROR, COLOR_STATUS_TEXT, COLOR_SUCCESS};
use crate::state::{StatusKind, StatusReporter};

pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Success => COLOR_SUCCESS,
        StatusKind::Error => COLOR_ERROR,
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusReporter) {
    let Some((message, kind)) = status.current() else {
        return;
    };
    let bar = Paragraph::new(format!(" {}", message)).style(
        Style::default()
            .bg(status_color(kind))
            .fg(COLOR_STATUS_TEXT)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(bar, area);
}
