//! Where timetables come from.

use std::future::Future;

use crate::domain::ScheduleQuery;
use crate::gotransit::{FixtureTimetable, TimetableClient, TimetableError, TimetableResponse};

/// Trait for providing timetables.
///
/// This abstraction lets the schedule query run against the live API or
/// against saved fixtures.
pub trait TimetableSource {
    /// Fetch every trip for the query's stop pair and date.
    ///
    /// A non-200 answer must be reported as [`TimetableError::Status`].
    fn fetch_timetable(
        &self,
        query: &ScheduleQuery,
    ) -> impl Future<Output = Result<TimetableResponse, TimetableError>> + Send;
}

impl TimetableSource for TimetableClient {
    fn fetch_timetable(
        &self,
        query: &ScheduleQuery,
    ) -> impl Future<Output = Result<TimetableResponse, TimetableError>> + Send {
        TimetableClient::fetch_timetable(self, query)
    }
}

impl TimetableSource for FixtureTimetable {
    fn fetch_timetable(
        &self,
        query: &ScheduleQuery,
    ) -> impl Future<Output = Result<TimetableResponse, TimetableError>> + Send {
        let result = FixtureTimetable::fetch_timetable(self, query);
        async move { result }
    }
}
