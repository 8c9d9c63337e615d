#[cfg(test)]
#[path = "widgets_test.rs"]
mod tests;

use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use strum::IntoEnumIterator;

use crate::domain::models::format_signed;
use crate::domain::models::FormState;
use crate::domain::models::HistoryLog;
use crate::domain::models::Screen;
use crate::domain::services::AppState;

const NAV_HEIGHT: u16 = 3;
const HISTORY_TITLE: &str = "Recently you searched:";
const HISTORY_PLACEHOLDER: &str = "Your previous queries will appear here";

pub fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let [content, nav] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(NAV_HEIGHT)]).areas(frame.area());

    match app_state.session.current_screen() {
        Screen::Weather => draw_weather(frame, content, app_state),
        screen => draw_placeholder(frame, content, screen),
    }

    draw_nav(frame, nav, app_state.session.current_screen());
}

fn draw_placeholder(frame: &mut Frame, area: Rect, screen: Screen) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(screen.title()).alignment(Alignment::Center),
        middle,
    );
}

fn draw_nav(frame: &mut Frame, area: Rect, current: Screen) {
    let screens = Screen::iter().collect::<Vec<_>>();
    let columns = Layout::horizontal(screens.iter().map(|_| Constraint::Ratio(1, 3))).split(area);

    for (idx, screen) in screens.iter().enumerate() {
        let mut style = Style::default();
        if *screen == current {
            style = style.bg(Color::Gray).fg(Color::Black);
        }

        let label = format!("F{} {}", idx + 1, screen.title());
        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL)),
            columns[idx],
        );
    }
}

fn draw_weather(frame: &mut Frame, area: Rect, app_state: &mut AppState) {
    let form = app_state.session.form();
    let form_height = match form.state() {
        FormState::Editing => 8,
        FormState::Submitted => 5,
    };

    let [title, form_area, action, history] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(form_height),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            Screen::Weather.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title,
    );

    match form.state() {
        FormState::Editing => {
            let [city, temperature, error] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
            ])
            .areas(form_area);

            frame.render_widget(&app_state.city_input, city);
            frame.render_widget(&app_state.temperature_input, temperature);
            if let Some(message) = form.error() {
                frame.render_widget(
                    Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
                    error,
                );
            }
        }
        FormState::Submitted => {
            let mut lines = vec![];
            if let (Some(reading), Some(result)) = (form.reading(), form.result()) {
                lines.push(Line::from(vec![
                    Span::styled(
                        reading.city().to_uppercase(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(format_signed(reading.celsius())),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(result.rendered_text.as_str()));
            }

            frame.render_widget(
                Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
                form_area,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(format!("[ {} ] Enter", form.state().action_label()))
            .alignment(Alignment::Right),
        action,
    );

    app_state.last_known_history_height = draw_history(
        frame,
        history,
        app_state.session.history(),
        app_state.history_scroll,
    );
}

/// Follows the newest record unless scrolled back by `scroll` rows. Returns
/// the number of rows available to records.
fn draw_history(frame: &mut Frame, area: Rect, history: &HistoryLog, scroll: usize) -> usize {
    let [title, list] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(Paragraph::new(HISTORY_TITLE), title);

    if history.is_empty() {
        frame.render_widget(
            Paragraph::new(HISTORY_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            list,
        );
        return list.height as usize;
    }

    let items = history
        .iter()
        .map(|record| {
            return ListItem::new(Line::from(vec![
                Span::raw(record.city().to_string()),
                Span::raw("  "),
                Span::raw(record.signed_temperature().to_string()),
            ]));
        })
        .collect::<Vec<_>>();

    let visible = list.height as usize;
    let offset = history
        .len()
        .saturating_sub(visible)
        .saturating_sub(scroll);
    let mut state = ListState::default().with_offset(offset);

    frame.render_stateful_widget(List::new(items), list, &mut state);

    return visible;
}
