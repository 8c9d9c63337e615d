use tui_textarea::Input;
use tui_textarea::Key;

use super::*;

fn type_text(app_state: &mut AppState, text: &str) {
    for c in text.chars() {
        app_state.handle_event(Event::KeyboardCharInput(Input {
            key: Key::Char(c),
            ..Default::default()
        }));
    }
}

fn fill_and_submit(app_state: &mut AppState, city: &str, temperature: &str) {
    type_text(app_state, city);
    app_state.handle_event(Event::KeyboardTab);
    type_text(app_state, temperature);
    app_state.handle_event(Event::KeyboardEnter);
}

#[test]
fn it_routes_typing_to_the_focused_field() {
    let mut app_state = AppState::new(Screen::Weather);
    type_text(&mut app_state, "Moscow");
    app_state.handle_event(Event::KeyboardTab);
    type_text(&mut app_state, "-5");

    assert_eq!(app_state.focus, InputFocus::Temperature);
    assert_eq!(app_state.session.form().city(), "Moscow");
    assert_eq!(app_state.session.form().temperature(), "-5");
}

#[test]
fn it_submits_and_resets_with_enter() {
    let mut app_state = AppState::new(Screen::Weather);
    fill_and_submit(&mut app_state, "Moscow", "20");

    assert_eq!(app_state.session.form().state(), FormState::Submitted);
    assert_eq!(app_state.session.history().len(), 1);

    app_state.handle_event(Event::KeyboardEnter);
    assert_eq!(app_state.session.form().state(), FormState::Editing);
    assert_eq!(app_state.focus, InputFocus::City);
    assert_eq!(single_line(&app_state.city_input), "");
    assert_eq!(single_line(&app_state.temperature_input), "");
    assert_eq!(app_state.session.history().len(), 1);
}

#[test]
fn it_keeps_editing_after_invalid_temperature() {
    let mut app_state = AppState::new(Screen::Weather);
    fill_and_submit(&mut app_state, "Moscow", "abc");

    assert_eq!(app_state.session.form().state(), FormState::Editing);
    assert_eq!(
        app_state.session.form().error(),
        Some("enter a valid temperature")
    );
    assert!(app_state.session.history().is_empty());
}

#[test]
fn it_ignores_typing_once_submitted() {
    let mut app_state = AppState::new(Screen::Weather);
    fill_and_submit(&mut app_state, "Oslo", "3");
    type_text(&mut app_state, "99");

    assert_eq!(app_state.session.form().temperature(), "3");
}

#[test]
fn it_strips_line_breaks_from_paste() {
    let mut app_state = AppState::new(Screen::Weather);
    app_state.handle_event(Event::KeyboardPaste("Saint\nPetersburg".to_string()));

    assert_eq!(app_state.session.form().city(), "SaintPetersburg");
}

#[test]
fn it_navigates_between_screens() {
    let mut app_state = AppState::new(Screen::Weather);
    app_state.handle_event(Event::Navigate(Screen::Favorites));
    assert_eq!(app_state.session.current_screen(), Screen::Favorites);

    app_state.handle_event(Event::KeyboardCTRLN);
    assert_eq!(app_state.session.current_screen(), Screen::Weather);
}

#[test]
fn it_ignores_input_and_enter_off_the_weather_screen() {
    let mut app_state = AppState::new(Screen::News);
    type_text(&mut app_state, "20");
    app_state.handle_event(Event::KeyboardEnter);

    assert_eq!(app_state.session.form().city(), "");
    assert!(app_state.session.history().is_empty());
}

#[test]
fn it_exits_on_ctrl_c() {
    let mut app_state = AppState::new(Screen::Weather);
    assert!(!app_state.handle_event(Event::UITick));
    assert!(app_state.handle_event(Event::KeyboardCTRLC));
}

#[test]
fn it_clamps_history_scroll_to_the_log() {
    let mut app_state = AppState::new(Screen::Weather);
    for city in ["Moscow", "Oslo", "Cairo"] {
        fill_and_submit(&mut app_state, city, "20");
        app_state.handle_event(Event::KeyboardEnter);
    }

    app_state.handle_event(Event::UIScrollPageUp);
    assert_eq!(app_state.history_scroll, 2);

    app_state.handle_event(Event::UIScrollPageDown);
    assert_eq!(app_state.history_scroll, 0);

    // Every record fits once the pane is known to have room for them.
    app_state.last_known_history_height = 10;
    app_state.handle_event(Event::UIScrollUp);
    assert_eq!(app_state.history_scroll, 0);
}
