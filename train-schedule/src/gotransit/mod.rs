//! GO Transit timetable API client.
//!
//! This module provides an HTTP client for the GO Transit schedules API and
//! the conversion of its timetable responses into service records.
//!
//! Key characteristics of the timetable endpoint:
//! - One unauthenticated GET returns every trip for a stop pair and date;
//!   there is no pagination
//! - Trips of all modes come back together; rail is transit type 1
//! - Times are preformatted display strings, not timestamps

mod client;
mod convert;
mod error;
mod fixture;
mod types;

pub use client::{TimetableClient, TimetableConfig};
pub use convert::{ConversionError, select_rail_services};
pub use error::TimetableError;
pub use fixture::FixtureTimetable;
pub use types::{LineDto, TimetableResponse, TripDto};
