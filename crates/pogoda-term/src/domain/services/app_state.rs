use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use super::WeatherSession;
use crate::domain::models::Event;
use crate::domain::models::FormState;
use crate::domain::models::Screen;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    City,
    Temperature,
}

const HISTORY_PAGE: usize = 5;

pub struct AppState<'a> {
    pub city_input: TextArea<'a>,
    pub focus: InputFocus,
    /// How many records the history view is scrolled back from the newest.
    pub history_scroll: usize,
    pub last_known_history_height: usize,
    pub session: WeatherSession,
    pub temperature_input: TextArea<'a>,
}

fn new_input<'a>(title: &'static str) -> TextArea<'a> {
    let mut textarea = TextArea::default();
    textarea.set_block(Block::default().borders(Borders::ALL).title(title));
    textarea.set_cursor_line_style(Style::default());
    return textarea;
}

fn single_line(textarea: &TextArea) -> String {
    return textarea.lines().join("");
}

impl<'a> AppState<'a> {
    pub fn new(initial_screen: Screen) -> AppState<'a> {
        let mut app_state = AppState {
            city_input: new_input("City"),
            focus: InputFocus::City,
            history_scroll: 0,
            last_known_history_height: 0,
            session: WeatherSession::new(initial_screen),
            temperature_input: new_input("Temperature (°C)"),
        };
        app_state.sync_focus_styles();

        return app_state;
    }

    /// Applies one event to completion. Returns true when the loop should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::KeyboardCTRLC => {
                return true;
            }
            Event::KeyboardCTRLN => {
                let next = self.session.current_screen().next();
                self.session.navigate(next);
            }
            Event::Navigate(screen) => {
                self.session.navigate(screen);
            }
            Event::KeyboardEnter => {
                self.primary_action();
            }
            Event::KeyboardTab => {
                if self.accepts_input() {
                    self.focus = match self.focus {
                        InputFocus::City => InputFocus::Temperature,
                        InputFocus::Temperature => InputFocus::City,
                    };
                    self.sync_focus_styles();
                }
            }
            Event::KeyboardCharInput(input) => {
                if self.accepts_input() && !is_line_break(&input) {
                    self.focused_input().input(input);
                    self.sync_session();
                }
            }
            Event::KeyboardPaste(text) => {
                if self.accepts_input() {
                    let text = text.replace(['\r', '\n'], "");
                    self.focused_input().insert_str(text);
                    self.sync_session();
                }
            }
            Event::UIScrollUp => {
                self.scroll_history_back(1);
            }
            Event::UIScrollDown => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            Event::UIScrollPageUp => {
                self.scroll_history_back(HISTORY_PAGE);
            }
            Event::UIScrollPageDown => {
                self.history_scroll = self.history_scroll.saturating_sub(HISTORY_PAGE);
            }
            Event::UITick => {}
        }

        return false;
    }

    /// "Evaluate" while editing, "New query" once submitted.
    fn primary_action(&mut self) {
        if self.session.current_screen() != Screen::Weather {
            return;
        }

        match self.session.form().state() {
            FormState::Editing => match self.session.submit() {
                Ok(_) => {
                    self.history_scroll = 0;
                }
                Err(err) => {
                    tracing::debug!(error = %err, "form kept in editing");
                }
            },
            FormState::Submitted => {
                self.session.reset();
                self.city_input = new_input("City");
                self.temperature_input = new_input("Temperature (°C)");
                self.focus = InputFocus::City;
                self.sync_focus_styles();
            }
        }
    }

    fn scroll_history_back(&mut self, rows: usize) {
        let max_scroll = self
            .session
            .history()
            .len()
            .saturating_sub(self.last_known_history_height.max(1));
        self.history_scroll = (self.history_scroll + rows).min(max_scroll);
    }

    fn accepts_input(&self) -> bool {
        return self.session.current_screen() == Screen::Weather
            && self.session.form().state() == FormState::Editing;
    }

    fn focused_input(&mut self) -> &mut TextArea<'a> {
        return match self.focus {
            InputFocus::City => &mut self.city_input,
            InputFocus::Temperature => &mut self.temperature_input,
        };
    }

    fn sync_session(&mut self) {
        self.session.set_city(&single_line(&self.city_input));
        self.session
            .set_temperature(&single_line(&self.temperature_input));
    }

    fn sync_focus_styles(&mut self) {
        let focused = Style::default().add_modifier(Modifier::REVERSED);
        let hidden = Style::default();
        match self.focus {
            InputFocus::City => {
                self.city_input.set_cursor_style(focused);
                self.temperature_input.set_cursor_style(hidden);
            }
            InputFocus::Temperature => {
                self.city_input.set_cursor_style(hidden);
                self.temperature_input.set_cursor_style(focused);
            }
        }
    }
}

// Both inputs are single line, Enter is the primary action.
fn is_line_break(input: &Input) -> bool {
    return match input {
        Input { key: Key::Enter, .. } => true,
        Input {
            key: Key::Char('m') | Key::Char('j'),
            ctrl: true,
            ..
        } => true,
        _ => false,
    };
}
