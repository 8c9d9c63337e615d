//! Terminal user interface for the Pogoda weather evaluator.
//!
//! A user enters a city and a temperature, the temperature is classified into one
//! of four fixed buckets, and every accepted query is appended to a history log
//! that lives for the duration of the session.

pub mod application;
pub mod configuration;
pub mod domain;
#[cfg(test)]
mod test_utils;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    classify, format_signed, parse_temperature, Bucket, ClassificationResult, Event, FormState,
    HistoryLog, HistoryRecord, ParseFailure, Screen, Submission, TemperatureReading,
};
pub use domain::services::{AppState, WeatherSession};
