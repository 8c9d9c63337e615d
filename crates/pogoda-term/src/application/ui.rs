use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::widgets;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Screen;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

/// Draws and handles events until the user quits. Each event runs to
/// completion before the next one is read.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    initial_screen: Screen,
) -> Result<()> {
    let mut app_state = AppState::new(initial_screen);
    let mut events = EventsService::new();

    tracing::info!(screen = %initial_screen, "session started");

    loop {
        terminal.draw(|frame| widgets::draw(frame, &mut app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event) {
            break;
        }
    }

    tracing::info!(queries = app_state.session.history().len(), "session ended");

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// Takes over the terminal, runs the session and restores the terminal.
pub async fn run() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let initial_screen =
        Screen::parse(Config::get(ConfigKey::InitialScreen)).unwrap_or_default();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let result = start_loop(&mut terminal, initial_screen).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return result;
}
