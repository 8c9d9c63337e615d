#[cfg(test)]
#[path = "reading_test.rs"]
mod tests;

use thiserror::Error;

/// The temperature field did not hold a base-10 integer. The message is shown
/// inline on the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("enter a valid temperature")]
pub struct ParseFailure {
    pub raw: String,
}

/// A city and temperature pair captured at submission time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemperatureReading {
    city: String,
    celsius: i32,
}

impl TemperatureReading {
    pub fn new(city: &str, celsius: i32) -> TemperatureReading {
        return TemperatureReading {
            city: city.to_string(),
            celsius,
        };
    }

    /// Builds a reading from raw form input. The city is taken verbatim.
    pub fn parse(city: &str, raw_temperature: &str) -> Result<TemperatureReading, ParseFailure> {
        let celsius = parse_temperature(raw_temperature)?;
        return Ok(TemperatureReading::new(city, celsius));
    }

    pub fn city(&self) -> &str {
        return &self.city;
    }

    pub fn celsius(&self) -> i32 {
        return self.celsius;
    }
}

/// Parses an optionally signed base-10 integer. Whitespace, decimals and values
/// outside the 32-bit range are rejected.
pub fn parse_temperature(raw: &str) -> Result<i32, ParseFailure> {
    return raw.parse::<i32>().map_err(|_| ParseFailure {
        raw: raw.to_string(),
    });
}
