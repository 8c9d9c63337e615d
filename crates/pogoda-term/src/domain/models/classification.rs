#[cfg(test)]
#[path = "classification_test.rs"]
mod tests;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use super::TemperatureReading;

/// One of the four fixed temperature categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    Cold,
    Normal,
    Hot,
    Catastrophe,
}

/// Inclusive ranges checked in order. Anything unmatched is a catastrophe.
const BUCKET_RANGES: [(i32, i32, Bucket); 3] = [
    (-50, 15, Bucket::Cold),
    (16, 25, Bucket::Normal),
    (26, 50, Bucket::Hot),
];

impl Bucket {
    pub fn from_celsius(celsius: i32) -> Bucket {
        return BUCKET_RANGES
            .iter()
            .find(|(lower, upper, _)| (*lower..=*upper).contains(&celsius))
            .map(|(_, _, bucket)| *bucket)
            .unwrap_or(Bucket::Catastrophe);
    }

    /// Word used in the rendered sentence.
    pub fn adjective(&self) -> &'static str {
        return match self {
            Bucket::Cold => "cold",
            Bucket::Normal => "normal",
            Bucket::Hot => "hot",
            Bucket::Catastrophe => "catastrophic",
        };
    }

    pub fn render(&self, city: &str) -> String {
        return format!("Currently in city {city} it is {}", self.adjective());
    }
}

/// Outcome of classifying a single reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub bucket: Bucket,
    pub rendered_text: String,
}

impl ClassificationResult {
    pub fn from_reading(reading: &TemperatureReading) -> ClassificationResult {
        let bucket = Bucket::from_celsius(reading.celsius());
        return ClassificationResult {
            bucket,
            rendered_text: bucket.render(reading.city()),
        };
    }
}

/// Maps any temperature to the sentence for its bucket. Both open tails share
/// the catastrophe sentence.
pub fn classify(celsius: i32, city: &str) -> String {
    return Bucket::from_celsius(celsius).render(city);
}
