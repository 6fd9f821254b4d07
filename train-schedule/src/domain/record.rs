//! Service records: the flattened output of a schedule query.

use std::fmt;

use serde::Deserialize;

/// Placeholder for display fields the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendering of a value the API sent as null.
const NULL_DISPLAY: &str = "-";

/// A loosely typed scalar from the timetable API.
///
/// `duration` and `tripNumber` arrive as numbers or strings depending on the
/// endpoint version, so both are kept as received and only rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// The `"N/A"` placeholder.
    pub fn not_available() -> Self {
        FieldValue::Text(NOT_AVAILABLE.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Unsigned(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// One matching rail trip, flattened with its first line.
///
/// Records are plain values: they are built fresh for every query and carry
/// no identity beyond their fields. Times and duration are `None` only when
/// the API sent them as null.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    /// Departure time as displayed by the API (e.g. "08:00").
    pub departure_time: Option<String>,
    /// Arrival time as displayed by the API.
    pub arrival_time: Option<String>,
    pub duration: Option<FieldValue>,
    /// Line name, or "N/A".
    pub line_display: String,
    /// Trip number, or "N/A".
    pub trip_number: FieldValue,
    pub from_stop: String,
    pub to_stop: String,
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}) {} trip {} [{} -> {}]",
            self.departure_time.as_deref().unwrap_or(NULL_DISPLAY),
            self.arrival_time.as_deref().unwrap_or(NULL_DISPLAY),
            self.duration
                .as_ref()
                .map_or_else(|| NULL_DISPLAY.to_string(), FieldValue::to_string),
            self.line_display,
            self.trip_number,
            self.from_stop,
            self.to_stop,
        )
    }
}
