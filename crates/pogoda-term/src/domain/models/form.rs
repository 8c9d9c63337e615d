#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use super::ClassificationResult;
use super::ParseFailure;
use super::TemperatureReading;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

impl FormState {
    /// Label of the primary action button for this state.
    pub fn action_label(&self) -> &'static str {
        return match self {
            FormState::Editing => "Evaluate",
            FormState::Submitted => "New query",
        };
    }
}

/// An accepted reading together with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub reading: TemperatureReading,
    pub result: ClassificationResult,
}

/// Input fields and outcome of the weather query form.
#[derive(Clone, Debug, Default)]
pub struct WeatherForm {
    city: String,
    temperature: String,
    state: FormState,
    submission: Option<Submission>,
    error: Option<String>,
}

impl WeatherForm {
    pub fn city(&self) -> &str {
        return &self.city;
    }

    pub fn temperature(&self) -> &str {
        return &self.temperature;
    }

    pub fn state(&self) -> FormState {
        return self.state;
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        return self.submission.as_ref().map(|e| return &e.result);
    }

    /// The reading accepted by the last successful submission.
    pub fn reading(&self) -> Option<&TemperatureReading> {
        return self.submission.as_ref().map(|e| return &e.reading);
    }

    /// Inline message left by a rejected submission.
    pub fn error(&self) -> Option<&str> {
        return self.error.as_deref();
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn set_temperature(&mut self, temperature: &str) {
        self.temperature = temperature.to_string();
    }

    /// EDITING -> SUBMITTED. Only fires on a successful parse; on failure the
    /// form stays in EDITING with the error message set.
    pub fn submit(&mut self) -> Result<Submission, ParseFailure> {
        let reading = match TemperatureReading::parse(&self.city, &self.temperature) {
            Ok(reading) => reading,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        let submission = Submission {
            result: ClassificationResult::from_reading(&reading),
            reading,
        };
        self.submission = Some(submission.clone());
        self.error = None;
        self.state = FormState::Submitted;

        return Ok(submission);
    }

    /// SUBMITTED -> EDITING, clearing both input fields.
    pub fn reset(&mut self) {
        *self = WeatherForm::default();
    }
}
