//! GO Transit rail schedule lookup.
//!
//! Answers: "which GO trains run directly from this stop to that one on
//! this date?"

pub mod domain;
pub mod gotransit;
pub mod schedule;
