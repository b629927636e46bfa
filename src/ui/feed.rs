//! Feed surface: refresh control, then placeholder or article cards.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::render_busy_indicator;
use super::helpers::{estimate_wrapped_line_count, inner_rect, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_RELEVANCE_HIGH, COLOR_RELEVANCE_LOW,
    COLOR_RELEVANCE_MEDIUM, COLOR_TAG,
};
use crate::models::Relevance;
use crate::state::{ArticleCard, FeedContent, FeedState};

pub fn relevance_color(relevance: Relevance) -> Color {
    match relevance {
        Relevance::High => COLOR_RELEVANCE_HIGH,
        Relevance::Medium => COLOR_RELEVANCE_MEDIUM,
        Relevance::Low => COLOR_RELEVANCE_LOW,
    }
}

fn pad() -> Span<'static> {
    Span::raw("  ")
}

/// Lines for one article card.
pub fn card_lines(card: &ArticleCard, selected: bool, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let marker = if selected { "▶ " } else { "  " };

    if let Some(image) = &card.image_url {
        lines.push(Line::from(vec![
            pad(),
            Span::styled(
                format!("🖼 {}", truncate_string(image, width.saturating_sub(6).max(8))),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }

    let title_style = if selected {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(card.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", card.badge_label),
            Style::default()
                .fg(relevance_color(card.relevance))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.push(Line::from(vec![
        pad(),
        Span::styled(card.meta(), Style::default().fg(COLOR_DIM)),
    ]));

    if !card.summary.is_empty() {
        for text_line in card.summary.lines() {
            lines.push(Line::from(vec![pad(), Span::raw(text_line.to_string())]));
        }
    }

    if !card.tags.is_empty() {
        let mut spans = vec![pad()];
        for (idx, tag) in card.tags.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("#{}", tag), Style::default().fg(COLOR_TAG)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines
}

/// Lines for the whole card list plus the row range of the selected card.
pub fn cards_lines(
    cards: &[ArticleCard],
    selected: Option<usize>,
    width: usize,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let mut lines = Vec::new();
    let mut selected_rows = None;
    let mut row = 0;

    for (idx, card) in cards.iter().enumerate() {
        let is_selected = selected == Some(idx);
        let card = card_lines(card, is_selected, width);
        let rows = estimate_wrapped_line_count(&card, width);
        if is_selected {
            selected_rows = Some((row, row + rows));
        }
        row += rows;
        lines.extend(card);
    }
    (lines, selected_rows)
}

pub fn render_feed(frame: &mut Frame, area: Rect, feed: &FeedState, tick: u64) {
    let block = Block::default()
        .title(" Feed ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [control_area, content_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

    frame.render_widget(Paragraph::new(refresh_line(feed, tick)), control_area);

    match &feed.content {
        FeedContent::Cards(cards) => {
            let width = content_area.width as usize;
            let (lines, selected_rows) = cards_lines(cards, feed.selected_index(), width);
            let height = content_area.height as usize;
            // Scroll so the selected card's first row is visible
            let top = match selected_rows {
                Some((start, end)) if end > height => start,
                _ => 0,
            };
            let list = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
            frame.render_widget(list, content_area);
        }
        other => {
            if let Some(text) = other.placeholder() {
                let placeholder =
                    Paragraph::new(Line::styled(text, Style::default().fg(COLOR_DIM)))
                        .wrap(Wrap { trim: true });
                frame.render_widget(placeholder, inner_rect(content_area, 1));
            }
        }
    }
}

fn refresh_line(feed: &FeedState, tick: u64) -> Line<'static> {
    if feed.refresh.is_enabled() {
        Line::from(vec![
            Span::styled(
                format!("[ {} ]", feed.refresh.label()),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  r", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        render_busy_indicator(feed.refresh.label(), tick)
    }
}
