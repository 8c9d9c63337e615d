#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::fmt;
use std::slice;

use serde::Serialize;

/// Formats a temperature with an explicit sign for positive values.
pub fn format_signed(celsius: i32) -> String {
    if celsius > 0 {
        return format!("+{celsius}°C");
    }

    return format!("{celsius}°C");
}

/// One accepted query. Never mutated once logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    city: String,
    signed_temperature: String,
}

impl HistoryRecord {
    pub fn new(city: &str, celsius: i32) -> HistoryRecord {
        return HistoryRecord {
            city: city.to_string(),
            signed_temperature: format_signed(celsius),
        };
    }

    pub fn city(&self) -> &str {
        return &self.city;
    }

    pub fn signed_temperature(&self) -> &str {
        return &self.signed_temperature;
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}: {}", self.city, self.signed_temperature);
    }
}

/// Append-only log of the queries made during one session, oldest first.
///
/// Records cannot be removed or reordered. The log is dropped together with
/// the session that owns it.
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> HistoryLog {
        return HistoryLog::default();
    }

    pub fn append(&mut self, city: &str, celsius: i32) -> &HistoryRecord {
        self.records.push(HistoryRecord::new(city, celsius));
        let idx = self.records.len() - 1;
        return &self.records[idx];
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    pub fn records(&self) -> &[HistoryRecord] {
        return &self.records;
    }

    pub fn iter(&self) -> slice::Iter<'_, HistoryRecord> {
        return self.records.iter();
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryRecord;
    type IntoIter = slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        return self.records.iter();
    }
}
