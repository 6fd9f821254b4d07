//! Domain types for the schedule query.
//!
//! Queries go in, service records come out. Nothing here talks to the
//! network; see [`crate::gotransit`] for the API side.

mod query;
mod record;
mod transit;

pub use query::ScheduleQuery;
pub use record::{FieldValue, NOT_AVAILABLE, ServiceRecord};
pub use transit::TransitType;
