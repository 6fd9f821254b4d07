//! Result of a schedule query.

use crate::domain::{ScheduleQuery, ServiceRecord};

/// What a schedule query produced.
///
/// An empty match and an upstream status failure are both ordinary outcomes
/// rather than errors; only transport and decoding problems are `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// At least one rail trip serves the stop pair.
    Found(Vec<ServiceRecord>),

    /// The timetable was fetched but no rail trip serves the stop pair.
    NoTrains,

    /// The API answered with a non-200 status.
    Failed { status: u16 },
}

impl ScheduleOutcome {
    /// Wrap selected records, mapping an empty selection to `NoTrains`.
    pub fn from_records(records: Vec<ServiceRecord>) -> Self {
        if records.is_empty() {
            ScheduleOutcome::NoTrains
        } else {
            ScheduleOutcome::Found(records)
        }
    }

    /// Matching records; empty unless `Found`.
    pub fn records(&self) -> &[ServiceRecord] {
        match self {
            ScheduleOutcome::Found(records) => records,
            ScheduleOutcome::NoTrains | ScheduleOutcome::Failed { .. } => &[],
        }
    }

    /// Matching records, or `None` if the request failed.
    ///
    /// `NoTrains` yields an empty vector, not `None`.
    pub fn into_records(self) -> Option<Vec<ServiceRecord>> {
        match self {
            ScheduleOutcome::Found(records) => Some(records),
            ScheduleOutcome::NoTrains => Some(Vec::new()),
            ScheduleOutcome::Failed { .. } => None,
        }
    }

    /// Whether the API rejected the request.
    pub fn is_failure(&self) -> bool {
        matches!(self, ScheduleOutcome::Failed { .. })
    }

    /// Operator-facing notice for this outcome, if it warrants one.
    pub fn notice(&self, query: &ScheduleQuery) -> Option<String> {
        match self {
            ScheduleOutcome::Found(_) => None,
            ScheduleOutcome::NoTrains => Some(format!(
                "There are no trains scheduled for {} from {} to {}.",
                query.date, query.departure, query.destination
            )),
            ScheduleOutcome::Failed { status } => Some(format!("Error: {status}")),
        }
    }
}
