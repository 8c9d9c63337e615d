#[cfg(test)]
#[path = "weather_session_test.rs"]
mod tests;

use crate::domain::models::ClassificationResult;
use crate::domain::models::FormState;
use crate::domain::models::HistoryLog;
use crate::domain::models::ParseFailure;
use crate::domain::models::Screen;
use crate::domain::models::WeatherForm;

/// All state owned by one running session: the selected screen, the query
/// form and the history log. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct WeatherSession {
    current_screen: Screen,
    form: WeatherForm,
    history: HistoryLog,
}

impl WeatherSession {
    pub fn new(initial_screen: Screen) -> WeatherSession {
        return WeatherSession {
            current_screen: initial_screen,
            ..Default::default()
        };
    }

    pub fn current_screen(&self) -> Screen {
        return self.current_screen;
    }

    pub fn form(&self) -> &WeatherForm {
        return &self.form;
    }

    pub fn history(&self) -> &HistoryLog {
        return &self.history;
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.current_screen != screen {
            tracing::debug!(from = %self.current_screen, to = %screen, "navigate");
        }
        self.current_screen = screen;
    }

    pub fn set_city(&mut self, city: &str) {
        self.form.set_city(city);
    }

    pub fn set_temperature(&mut self, temperature: &str) {
        self.form.set_temperature(temperature);
    }

    /// Classifies the current input and logs it. A form that is already
    /// submitted returns its existing result without logging again.
    pub fn submit(&mut self) -> Result<ClassificationResult, ParseFailure> {
        if self.form.state() == FormState::Submitted {
            if let Some(result) = self.form.result() {
                return Ok(result.clone());
            }
        }

        let submission = match self.form.submit() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::info!(raw = err.raw.as_str(), "submission rejected");
                return Err(err);
            }
        };

        let reading = &submission.reading;
        let record = self
            .history
            .append(reading.city(), reading.celsius())
            .clone();
        tracing::info!(
            city = record.city(),
            temperature = record.signed_temperature(),
            bucket = %submission.result.bucket,
            history_len = self.history.len(),
            "submission accepted"
        );

        return Ok(submission.result);
    }

    /// Returns the form to editing with empty fields. History is kept.
    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        self.form.reset();
    }
}
