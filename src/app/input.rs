//! Keyboard and paste handling for the App.
//!
//! Global keys:
//! - `Ctrl+C` / `Ctrl+Q` quit
//! - `F1` / `F2` / `F3` select Chat / Feed / Settings
//! - `Tab` / `Shift+Tab` cycle views
//!
//! Everything else goes to the active view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::state::ViewId;
use crate::widgets::TextAreaInput;

/// Lines moved by PageUp/PageDown in the transcript.
const PAGE_LINES: u16 = 5;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::F(1) => {
                self.select_view(ViewId::Chat);
                return;
            }
            KeyCode::F(2) => {
                self.select_view(ViewId::Feed);
                return;
            }
            KeyCode::F(3) => {
                self.select_view(ViewId::Settings);
                return;
            }
            KeyCode::Tab => {
                self.next_view();
                return;
            }
            KeyCode::BackTab => {
                self.prev_view();
                return;
            }
            _ => {}
        }

        match self.views.active() {
            ViewId::Chat => self.handle_chat_key(key),
            ViewId::Feed => self.handle_feed_key(key),
            ViewId::Settings => self.handle_settings_key(key),
        }
    }

    /// Insert pasted text into the active editor.
    pub fn handle_paste(&mut self, text: &str) {
        match self.views.active() {
            // The chat input is a single line
            ViewId::Chat => {
                let flat: String = text
                    .chars()
                    .filter(|c| *c != '\r')
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                self.chat.input.insert_str(&flat);
            }
            ViewId::Settings => self.settings.buffer.insert_str(text),
            ViewId::Feed => return,
        }
        self.mark_dirty();
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.send_message(),
            // Ctrl+M inserts a newline in the TextArea bindings
            KeyCode::Char('m') if ctrl => self.send_message(),
            KeyCode::PageUp => self.chat.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.chat.scroll_down(PAGE_LINES),
            _ => edit_line(&mut self.chat.input, key),
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.feed.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.feed.select_next(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected_article(),
            KeyCode::Char('r') => self.refresh_feeds(),
            KeyCode::Char('l') => self.load_articles(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.save_config(),
            KeyCode::Char('l') if ctrl => self.load_config(),
            _ => edit_line(&mut self.settings.buffer, key),
        }
    }
}

/// Hand a key to the editor's TextArea bindings.
fn edit_line(editor: &mut TextAreaInput, key: KeyEvent) {
    if editor.input(key) {
        tracing::trace!("Editor content changed by {:?}", key.code);
    }
}
