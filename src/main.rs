use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use newsdeck::app::{App, AppMessage};
use newsdeck::cli::{handle_help_command, handle_version_command, parse_args, CliCommand};
use newsdeck::startup::DeckConfig;
use newsdeck::terminal::setup_panic_hook;
use newsdeck::{logging, ui};

/// Event loop tick
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => handle_version_command(),
        Ok(CliCommand::Help) => handle_help_command(),
        Ok(CliCommand::RunTui(overrides)) => overrides,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Try 'newsdeck --help'");
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = DeckConfig::from_env().apply_cli(&overrides);
    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::info!(
        "Agent service at {} (cancel stale requests: {})",
        config.base_url,
        config.cancel_stale_requests
    );

    let runtime = tokio::runtime::Runtime::new()?;

    // Restore the terminal if the main thread panics
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config)?;
        app.start();
        run_app(&mut terminal, &mut app).await
    });

    restore_terminal(&mut terminal)?;
    tracing::info!("newsdeck exiting");

    result
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
