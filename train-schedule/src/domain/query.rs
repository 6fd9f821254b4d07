//! Timetable query parameters.

use std::fmt;

/// A request for trips between two stops on one date.
///
/// Stop codes and the date are passed to the API as given. They are only
/// percent-encoded, never validated, so a malformed date surfaces as whatever
/// the API answers for it.
///
/// # Examples
///
/// ```
/// use train_schedule::domain::ScheduleQuery;
///
/// let morning = ScheduleQuery::new("ME", "UN", "2024-11-04");
/// let evening = morning.reversed();
/// assert_eq!(evening.departure, "UN");
/// assert_eq!(evening.destination, "ME");
/// assert_eq!(evening.date, "2024-11-04");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleQuery {
    /// Stop code the trip must start from (e.g. "ME").
    pub departure: String,
    /// Stop code the trip must end at (e.g. "UN").
    pub destination: String,
    /// Service date, `YYYY-MM-DD`.
    pub date: String,
}

impl ScheduleQuery {
    /// Create a query for the given stop pair and date.
    pub fn new(
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
        }
    }

    /// The same query in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            departure: self.destination.clone(),
            destination: self.departure.clone(),
            date: self.date.clone(),
        }
    }
}

impl fmt::Display for ScheduleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} on {}",
            self.departure, self.destination, self.date
        )
    }
}
