//! TextArea wrapper for the chat input and the configuration editor.
//!
//! Wraps `tui_textarea::TextArea` with the styling both editors share and
//! the whole-content accessors the view models need.

use crossterm::event::KeyEvent;
use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Clone)]
pub struct TextAreaInput {
    textarea: TextArea<'static>,
}

impl Default for TextAreaInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAreaInput {
    pub fn new() -> Self {
        Self {
            textarea: styled(TextArea::default()),
        }
    }

    /// Placeholder shown while the editor is empty.
    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.textarea.set_placeholder_text(text.to_string());
        self.textarea
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
        self
    }

    /// Full content with lines joined by `\n`.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// True when every line is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.trim().is_empty())
    }

    /// (row, col) of the cursor, col counted in chars.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Replace the content and put the cursor at the top.
    ///
    /// A trailing newline survives as an empty last line so `content`
    /// returns the text unchanged.
    pub fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert_str(text);
        self.textarea.move_cursor(CursorMove::Top);
        self.textarea.move_cursor(CursorMove::Head);
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.delete_char();
    }

    /// Insert text at the cursor, splitting on line breaks.
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.textarea.insert_newline();
            }
            if !part.is_empty() {
                self.textarea.insert_str(part);
            }
        }
    }

    /// Forward a key to the TextArea's default bindings.
    ///
    /// Returns true when the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// The widget for rendering.
    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

fn styled(mut textarea: TextArea<'static>) -> TextArea<'static> {
    // No underline on the cursor line; block cursor in inverse colors
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().fg(Color::Black).bg(Color::White));
    textarea.set_tab_length(2);
    textarea
}
