use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use super::*;
use crate::domain::models::Event;

fn render(app_state: &mut AppState) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 30))?;
    terminal.draw(|frame| draw(frame, app_state))?;
    return Ok(buffer_text(terminal.backend().buffer()));
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    return buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
}

fn submit(app_state: &mut AppState, city: &str, temperature: &str) {
    for c in city.chars() {
        app_state.handle_event(Event::KeyboardCharInput(Input {
            key: Key::Char(c),
            ..Default::default()
        }));
    }
    app_state.handle_event(Event::KeyboardTab);
    app_state.handle_event(Event::KeyboardPaste(temperature.to_string()));
    app_state.handle_event(Event::KeyboardEnter);
}

#[test]
fn it_renders_the_empty_weather_form() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    let text = render(&mut app_state)?;

    assert!(text.contains("City"));
    assert!(text.contains("Temperature (°C)"));
    assert!(text.contains("[ Evaluate ] Enter"));
    assert!(text.contains(HISTORY_TITLE));
    assert!(text.contains(HISTORY_PLACEHOLDER));
    assert!(text.contains("F1 Weather"));
    assert!(text.contains("F2 News"));
    assert!(text.contains("F3 Favorites"));

    return Ok(());
}

#[test]
fn it_renders_the_result_card_and_history() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    submit(&mut app_state, "Moscow", "20");
    let text = render(&mut app_state)?;

    assert!(text.contains("MOSCOW  +20°C"));
    assert!(text.contains("Currently in city Moscow it is normal"));
    assert!(text.contains("[ New query ] Enter"));
    assert!(text.contains("Moscow  +20°C"));
    assert!(!text.contains(HISTORY_PLACEHOLDER));

    return Ok(());
}

#[test]
fn it_renders_the_inline_parse_error() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    submit(&mut app_state, "Moscow", "abc");
    let text = render(&mut app_state)?;

    assert!(text.contains("enter a valid temperature"));
    assert!(text.contains("[ Evaluate ] Enter"));

    return Ok(());
}

#[test]
fn it_renders_placeholder_screens() -> Result<()> {
    let mut app_state = AppState::new(Screen::News);
    let text = render(&mut app_state)?;
    assert!(text.contains("News"));
    assert!(!text.contains(HISTORY_TITLE));

    app_state.handle_event(Event::Navigate(Screen::Favorites));
    let text = render(&mut app_state)?;
    assert!(text.contains("Favorites"));
    assert!(!text.contains("[ Evaluate ] Enter"));

    return Ok(());
}

fn fill_history(app_state: &mut AppState, count: usize) {
    for idx in 0..count {
        submit(app_state, &format!("City{idx}"), "20");
        app_state.handle_event(Event::KeyboardEnter);
    }
}

#[test]
fn it_follows_the_newest_record_when_history_overflows() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    fill_history(&mut app_state, 20);
    let text = render(&mut app_state)?;

    assert!(text.contains("City19  +20°C"));
    assert!(!text.contains("City0  +20°C"));

    return Ok(());
}

#[test]
fn it_scrolls_back_to_the_oldest_record() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    fill_history(&mut app_state, 20);
    render(&mut app_state)?;
    assert_eq!(app_state.last_known_history_height, 14);

    for _ in 0..10 {
        app_state.handle_event(Event::UIScrollPageUp);
    }
    assert_eq!(app_state.history_scroll, 6);
    let text = render(&mut app_state)?;
    assert!(text.contains("City0  +20°C"));
    assert!(!text.contains("City19  +20°C"));

    for _ in 0..6 {
        app_state.handle_event(Event::UIScrollDown);
    }
    assert_eq!(app_state.history_scroll, 0);
    let text = render(&mut app_state)?;
    assert!(text.contains("City19  +20°C"));

    return Ok(());
}

#[test]
fn it_returns_to_the_newest_record_after_a_submission() -> Result<()> {
    let mut app_state = AppState::new(Screen::Weather);
    fill_history(&mut app_state, 20);
    render(&mut app_state)?;
    app_state.handle_event(Event::UIScrollPageUp);
    assert_eq!(app_state.history_scroll, 5);

    submit(&mut app_state, "Cairo", "45");
    assert_eq!(app_state.history_scroll, 0);
    let text = render(&mut app_state)?;
    assert!(text.contains("Cairo  +45°C"));

    return Ok(());
}
