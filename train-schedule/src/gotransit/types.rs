//! Timetable API response DTOs.
//!
//! These types map directly to the GO Transit `timetable/all` JSON response.
//! Fields the filter can live without are `Option`; the API omits rather
//! than nulls them in many cases. Fields every record needs are
//! `Option<Option<_>>`: the outer layer says whether the key was sent at all,
//! the inner one whether it was null.

use serde::{Deserialize, Deserializer};

use crate::domain::{FieldValue, TransitType};

/// Response from `GET /{language}/timetable/all`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableResponse {
    /// Trips for the requested stop pair and date. Absent when there are none.
    pub trips: Option<Vec<TripDto>>,
}

impl TimetableResponse {
    /// Trips in response order, treating an absent list as empty.
    pub fn trips(&self) -> &[TripDto] {
        self.trips.as_deref().unwrap_or(&[])
    }
}

/// One scheduled run, possibly spanning several lines.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Mode of the trip; rail is 1.
    pub transit_type: Option<TransitType>,

    /// Total trip duration, as the API renders it.
    #[serde(default, deserialize_with = "present")]
    pub duration: Option<Option<FieldValue>>,

    /// Departure time for display (e.g. "08:00").
    #[serde(default, deserialize_with = "present")]
    pub departure_time_display: Option<Option<String>>,

    /// Arrival time for display.
    #[serde(default, deserialize_with = "present")]
    pub arrival_time_display: Option<Option<String>>,

    /// Legs of the trip, in travel order.
    pub lines: Option<Vec<LineDto>>,
}

/// Mark a key as sent, keeping a null value as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TripDto {
    /// The first leg, if the trip has any.
    pub fn first_line(&self) -> Option<&LineDto> {
        self.lines.as_deref().and_then(|lines| lines.first())
    }
}

/// One leg of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub from_stop_code: Option<String>,
    pub to_stop_code: Option<String>,

    /// Human-readable line name (e.g. "Lakeshore West").
    pub line_display: Option<String>,

    pub trip_number: Option<FieldValue>,
}
