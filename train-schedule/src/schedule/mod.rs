//! Rail schedule query.
//!
//! Fetches the timetable for a stop pair and date, keeps the rail trips that
//! run exactly between those stops, and reports the outcome.

mod outcome;
mod source;

use tracing::{error, info};

use crate::domain::ScheduleQuery;
use crate::gotransit::{ConversionError, TimetableError, select_rail_services};

pub use outcome::ScheduleOutcome;
pub use source::TimetableSource;

/// Errors a schedule query cannot turn into an outcome.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Fetching or decoding the timetable failed
    #[error(transparent)]
    Timetable(#[from] TimetableError),

    /// A matching trip was missing required data
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Query rail services between two stops on a date.
///
/// Makes exactly one request. A non-200 answer becomes
/// [`ScheduleOutcome::Failed`] and an empty selection becomes
/// [`ScheduleOutcome::NoTrains`]; both are logged for the operator.
pub async fn get_train_services<S: TimetableSource>(
    source: &S,
    query: &ScheduleQuery,
) -> Result<ScheduleOutcome, ScheduleError> {
    let response = match source.fetch_timetable(query).await {
        Ok(response) => response,
        Err(TimetableError::Status { status, .. }) => {
            let outcome = ScheduleOutcome::Failed { status };
            if let Some(notice) = outcome.notice(query) {
                error!(status, "{notice}");
            }
            return Ok(outcome);
        }
        Err(e) => return Err(e.into()),
    };

    let records = select_rail_services(&response, query)?;
    let outcome = ScheduleOutcome::from_records(records);

    if let Some(notice) = outcome.notice(query) {
        info!(%query, "{notice}");
    }

    Ok(outcome)
}
