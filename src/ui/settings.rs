//! Settings surface: the raw configuration editor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::state::ConfigEditorState;

/// Block title with the dirty marker.
pub fn settings_title(editor: &ConfigEditorState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Configuration ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if editor.is_dirty() {
        spans.push(Span::styled("[modified] ", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// Cursor position footer, 1-based.
pub fn cursor_label(editor: &ConfigEditorState) -> Line<'static> {
    let (row, col) = editor.buffer.cursor();
    Line::styled(
        format!(" Ln {}, Col {} ", row + 1, col + 1),
        Style::default().fg(COLOR_DIM),
    )
    .right_aligned()
}

pub fn render_settings(frame: &mut Frame, area: Rect, editor: &ConfigEditorState) {
    let block = Block::default()
        .title(settings_title(editor))
        .title_bottom(cursor_label(editor))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(editor.buffer.widget(), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_text(editor: &ConfigEditorState) -> String {
        settings_title(editor)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_title_dirty_marker() {
        let mut editor = ConfigEditorState::new();
        editor.apply_loaded(Ok("a: 1".to_string()));
        assert!(!title_text(&editor).contains("[modified]"));

        editor.buffer.insert_str("#");
        assert!(title_text(&editor).contains("[modified]"));
    }

    #[test]
    fn test_cursor_label_follows_edits() {
        let mut editor = ConfigEditorState::new();
        editor.apply_loaded(Ok("a: 1\nb: 2".to_string()));
        assert_eq!(cursor_label(&editor).to_string(), " Ln 1, Col 1 ");

        editor.buffer.insert_str("x\nyz");
        assert_eq!(cursor_label(&editor).to_string(), " Ln 2, Col 3 ");
    }
}
