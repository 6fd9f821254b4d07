//! Conversion from timetable DTOs to service records.
//!
//! A trip becomes a [`ServiceRecord`] only if it is rail and its first line
//! runs exactly from the query's departure to its destination. Later lines
//! of a multi-leg trip are never consulted.

use crate::domain::{FieldValue, NOT_AVAILABLE, ScheduleQuery, ServiceRecord};

use super::types::{LineDto, TimetableResponse, TripDto};

/// Error during DTO to record conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A matching trip lacks a field every record needs
    #[error("trip {trip}: missing required field: {field}")]
    MissingField { trip: usize, field: &'static str },
}

/// Select the rail trips of a timetable that serve the query's stop pair.
///
/// Records come back in response order. A matching trip whose response omits
/// the departure time, arrival time or duration key fails the whole
/// selection; a key sent as null is kept as `None`. Trips that do not match
/// are never checked for those fields.
pub fn select_rail_services(
    response: &TimetableResponse,
    query: &ScheduleQuery,
) -> Result<Vec<ServiceRecord>, ConversionError> {
    let mut records = Vec::new();

    for (index, trip) in response.trips().iter().enumerate() {
        if !trip.transit_type.is_some_and(|t| t.is_rail()) {
            continue;
        }

        let line = trip.first_line().cloned().unwrap_or_default();
        let from_stop = stop_code(&line.from_stop_code);
        let to_stop = stop_code(&line.to_stop_code);

        if from_stop == query.departure && to_stop == query.destination {
            records.push(convert_trip(index, trip, &line, from_stop, to_stop)?);
        }
    }

    Ok(records)
}

fn stop_code(code: &Option<String>) -> &str {
    code.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn convert_trip(
    index: usize,
    trip: &TripDto,
    line: &LineDto,
    from_stop: &str,
    to_stop: &str,
) -> Result<ServiceRecord, ConversionError> {
    let missing = |field| ConversionError::MissingField { trip: index, field };

    Ok(ServiceRecord {
        departure_time: trip
            .departure_time_display
            .clone()
            .ok_or_else(|| missing("departureTimeDisplay"))?,
        arrival_time: trip
            .arrival_time_display
            .clone()
            .ok_or_else(|| missing("arrivalTimeDisplay"))?,
        duration: trip.duration.clone().ok_or_else(|| missing("duration"))?,
        line_display: line
            .line_display
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        trip_number: line
            .trip_number
            .clone()
            .unwrap_or_else(FieldValue::not_available),
        from_stop: from_stop.to_string(),
        to_stop: to_stop.to_string(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::TransitType;
    use proptest::prelude::*;

    const STOPS: &[&str] = &["ME", "UN", "AL", "OS", "me"];

    fn stop() -> impl Strategy<Value = String> {
        prop::sample::select(STOPS).prop_map(str::to_string)
    }

    /// A complete trip: every required field present, one or two lines.
    fn trip_strategy() -> impl Strategy<Value = TripDto> {
        (
            0i64..4,
            prop::collection::vec((stop(), stop()), 1..3),
            0u16..1440,
        )
            .prop_map(|(transit, legs, dep_mins)| TripDto {
                transit_type: Some(TransitType(transit)),
                duration: Some(Some(FieldValue::Integer(i64::from(dep_mins % 90)))),
                departure_time_display: Some(Some(format!("{:02}:{:02}", dep_mins / 60, dep_mins % 60))),
                arrival_time_display: Some(Some("23:59".to_string())),
                lines: Some(
                    legs.into_iter()
                        .enumerate()
                        .map(|(i, (from, to))| LineDto {
                            from_stop_code: Some(from),
                            to_stop_code: Some(to),
                            line_display: Some(format!("Line {i}")),
                            trip_number: Some(FieldValue::Integer(i as i64)),
                        })
                        .collect(),
                ),
            })
    }

    fn response_strategy() -> impl Strategy<Value = TimetableResponse> {
        prop::collection::vec(trip_strategy(), 0..12).prop_map(|trips| TimetableResponse {
            trips: Some(trips),
        })
    }

    fn matches(trip: &TripDto, query: &ScheduleQuery) -> bool {
        let line = trip.first_line().unwrap();
        trip.transit_type == Some(TransitType::RAIL)
            && line.from_stop_code.as_deref() == Some(query.departure.as_str())
            && line.to_stop_code.as_deref() == Some(query.destination.as_str())
    }

    proptest! {
        #[test]
        fn records_are_exactly_the_matching_trips_in_order(
            response in response_strategy(),
            from in stop(),
            to in stop(),
        ) {
            let query = ScheduleQuery::new(from, to, "2024-11-04");
            let records = select_rail_services(&response, &query).unwrap();

            let expected: Vec<&TripDto> = response
                .trips()
                .iter()
                .filter(|t| matches(t, &query))
                .collect();

            prop_assert_eq!(records.len(), expected.len());
            for (record, trip) in records.iter().zip(expected) {
                prop_assert_eq!(
                    record.departure_time.as_ref(),
                    trip.departure_time_display.as_ref().and_then(Option::as_ref)
                );
                prop_assert_eq!(&record.from_stop, &query.departure);
                prop_assert_eq!(&record.to_stop, &query.destination);
                prop_assert_eq!(&record.line_display, "Line 0");
            }
        }

        #[test]
        fn non_rail_trips_never_appear(
            response in response_strategy(),
            from in stop(),
            to in stop(),
        ) {
            let non_rail = TimetableResponse {
                trips: Some(
                    response
                        .trips()
                        .iter()
                        .filter(|t| t.transit_type != Some(TransitType::RAIL))
                        .cloned()
                        .collect(),
                ),
            };
            let query = ScheduleQuery::new(from, to, "2024-11-04");

            prop_assert!(select_rail_services(&non_rail, &query).unwrap().is_empty());
        }

        #[test]
        fn selection_is_idempotent(
            response in response_strategy(),
            from in stop(),
            to in stop(),
        ) {
            let query = ScheduleQuery::new(from, to, "2024-11-04");
            let first = select_rail_services(&response, &query).unwrap();
            let second = select_rail_services(&response, &query).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
