//! Terminal restoration on panic.
//!
//! Only a panic on the main thread ends the program. A panic inside a
//! spawned task unwinds that task alone, so the terminal must stay in raw
//! mode and the alternate screen for the UI that keeps running.

use crossterm::{
    cursor::Show,
    event::DisableBracketedPaste,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io;
use std::panic;

/// Name std gives the thread running `main`.
const MAIN_THREAD: &str = "main";

/// Install a panic hook that restores the terminal for main-thread panics.
///
/// Call early in main, before entering raw mode. Background panics are
/// logged instead of printed over the UI.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if restores_terminal(std::thread::current().name()) {
            emergency_restore();
            original_hook(panic_info);
        } else {
            tracing::error!("Background task panicked: {}", panic_info);
        }
    }));
}

/// True when a panic on the named thread takes the program down.
pub fn restores_terminal(thread_name: Option<&str>) -> bool {
    thread_name == Some(MAIN_THREAD)
}

/// Best-effort restore, errors ignored.
fn emergency_restore() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}
