//! Chat surface: transcript above, input line below.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::render_busy_indicator;
use super::helpers::estimate_wrapped_line_count;
use super::theme::{COLOR_AGENT, COLOR_BORDER, COLOR_DIM, COLOR_USER};
use crate::models::Sender;
use crate::state::ChatState;

/// Transcript lines: a header per message, its text, then a blank row.
pub fn chat_lines(chat: &ChatState, tick: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if chat.messages().is_empty() {
        lines.push(Line::styled(
            "Ask the agent about your news.",
            Style::default().fg(COLOR_DIM),
        ));
    }

    for message in chat.messages() {
        let (name, color) = match message.sender {
            Sender::User => ("You", COLOR_USER),
            Sender::Agent => ("Agent", COLOR_AGENT),
        };
        lines.push(Line::from(vec![
            Span::styled(
                name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.sent_at.format("%H:%M")),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        for text_line in message.text.lines() {
            lines.push(Line::raw(text_line.to_string()));
        }
        lines.push(Line::raw(""));
    }

    if chat.in_flight() > 0 {
        lines.push(render_busy_indicator("Waiting for the agent...", tick));
    }
    lines
}

pub fn render_chat(frame: &mut Frame, area: Rect, chat: &ChatState, tick: u64) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let block = Block::default()
        .title(" Chat ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(transcript_area);

    let lines = chat_lines(chat, tick);
    let total = estimate_wrapped_line_count(&lines, inner.width as usize);
    let max_scroll = total.saturating_sub(inner.height as usize);
    let top = max_scroll.saturating_sub(chat.scroll_back() as usize);

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    frame.render_widget(transcript, transcript_area);

    render_input(frame, input_area, chat);
}

fn render_input(frame: &mut Frame, area: Rect, chat: &ChatState) {
    let block = Block::default()
        .title(" Message ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    // TextArea scrolls horizontally to keep its cursor in view
    frame.render_widget(chat.input.widget(), inner);
}
