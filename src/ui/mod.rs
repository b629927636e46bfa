//! UI rendering for newsdeck
//!
//! Screen layout, top to bottom:
//! - Header with the name and the view switcher
//! - The active surface (chat, feed or settings)
//! - Status bar
//! - Keybind hints
//!
//! Every render function takes the view model it draws by reference; none
//! of them mutate state.

mod chat;
pub mod components;
mod feed;
mod helpers;
mod layout;
mod settings;
mod status_bar;
mod theme;

pub use chat::{chat_lines, render_chat};
pub use feed::{card_lines, cards_lines, relevance_color, render_feed};
pub use helpers::{estimate_wrapped_line_count, truncate_string};
pub use layout::{breakpoints, LayoutContext};
pub use settings::{render_settings, settings_title};
pub use status_bar::{render_status_bar, status_color};
pub use theme::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::ViewId;
use components::{render_tab_selector, TabItem};

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header_area, body_area, status_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &ctx);

    match app.views.active() {
        ViewId::Chat => render_chat(frame, body_area, &app.chat, app.tick_count),
        ViewId::Feed => render_feed(frame, body_area, &app.feed, app.tick_count),
        ViewId::Settings => render_settings(frame, body_area, &app.settings),
    }

    render_status_bar(frame, status_area, &app.status);
    render_hints(frame, hints_area, app.views.active(), &ctx);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let items: Vec<TabItem> = app
        .views
        .nav_controls()
        .map(|(control, _)| TabItem::from(control))
        .collect();
    let selected = app.views.active().index();

    let mut spans = vec![Span::styled(
        " newsdeck ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(render_tab_selector(&items, selected, ctx).spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keybind hints for a view.
pub fn keybind_hints(view: ViewId) -> &'static str {
    match view {
        ViewId::Chat => "Enter send · PgUp/PgDn scroll · Tab switch · Ctrl+C quit",
        ViewId::Feed => "↑/↓ select · Enter open · r refresh · l reload · Tab switch · Ctrl+C quit",
        ViewId::Settings => "Ctrl+S save · Ctrl+L reload · Tab switch · Ctrl+C quit",
    }
}

fn render_hints(frame: &mut Frame, area: Rect, view: ViewId, ctx: &LayoutContext) {
    if ctx.is_extra_small() {
        return;
    }
    let hints = Paragraph::new(Line::styled(
        format!(" {}", keybind_hints(view)),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(hints, area);
}
