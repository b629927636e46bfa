//! Tab Selector Component
//!
//! The horizontal view switcher. Uses a `▶` marker for the active view and
//! shows each view's hotkey unless the terminal is compact.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::NavControl;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem<'a> {
    pub label: &'a str,
    /// Key that selects the tab, e.g. "F2"
    pub hotkey: Option<&'a str>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            hotkey: None,
        }
    }

    pub fn with_hotkey(label: &'a str, hotkey: &'a str) -> Self {
        Self {
            label,
            hotkey: Some(hotkey),
        }
    }
}

impl From<&NavControl> for TabItem<'static> {
    fn from(control: &NavControl) -> Self {
        TabItem::with_hotkey(control.label, control.hotkey)
    }
}

/// Render a horizontal tab selector with `selected` marked.
///
/// # Example
/// ```ignore
/// let items: Vec<TabItem> = NAV_CONTROLS.iter().map(TabItem::from).collect();
/// let line = render_tab_selector(&items, 1, &ctx);
/// ```
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(item.label.to_string(), dim));
        }

        if let Some(hotkey) = item.hotkey.filter(|_| !ctx.is_compact()) {
            spans.push(Span::styled(
                format!(" {}", hotkey),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
