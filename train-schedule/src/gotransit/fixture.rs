//! Fixture timetable source for running without API access.
//!
//! Loads saved timetable responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::ScheduleQuery;

use super::error::TimetableError;
use super::types::TimetableResponse;

/// Route key: (departure stop code, destination stop code).
type RouteKey = (String, String);

/// Timetable source that serves saved responses from a directory.
///
/// Expects files named `{FROM}-{TO}.json` (e.g. `ME-UN.json`), each holding a
/// complete `timetable/all` response. Dates are ignored: a fixture answers
/// for every date.
#[derive(Debug, Clone)]
pub struct FixtureTimetable {
    routes: HashMap<RouteKey, TimetableResponse>,
}

impl FixtureTimetable {
    /// Load every fixture in a directory.
    ///
    /// Fails if the directory can't be read, a fixture doesn't parse, or no
    /// fixtures are found at all.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TimetableError::Fixture {
            message: format!("failed to read fixture directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TimetableError::Fixture {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "ME-UN.json" -> ("ME", "UN")
            let (from, to) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.split_once('-'))
                .ok_or_else(|| TimetableError::Fixture {
                    message: format!("fixture name is not FROM-TO.json: {:?}", path),
                })?;
            let key = (from.to_string(), to.to_string());

            let json = std::fs::read_to_string(&path).map_err(|e| TimetableError::Fixture {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let response: TimetableResponse =
                serde_json::from_str(&json).map_err(|e| TimetableError::Fixture {
                    message: format!("failed to parse {:?}: {}", path, e),
                })?;

            routes.insert(key, response);
        }

        if routes.is_empty() {
            return Err(TimetableError::Fixture {
                message: format!("no fixture files found in {:?}", data_dir),
            });
        }

        Ok(Self { routes })
    }

    /// Look up the saved timetable for a query.
    ///
    /// A route with no fixture answers 404, like the live API for an unknown
    /// stop.
    pub fn fetch_timetable(
        &self,
        query: &ScheduleQuery,
    ) -> Result<TimetableResponse, TimetableError> {
        let key = (query.departure.clone(), query.destination.clone());

        self.routes
            .get(&key)
            .cloned()
            .ok_or_else(|| TimetableError::Status {
                status: 404,
                message: format!("no fixture for {} -> {}", query.departure, query.destination),
            })
    }

    /// Routes with a loaded fixture, sorted.
    pub fn available_routes(&self) -> Vec<(String, String)> {
        let mut routes: Vec<_> = self.routes.keys().cloned().collect();
        routes.sort();
        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ME_UN: &str = r#"{"trips": [{"transitType": 1, "duration": 30,
        "departureTimeDisplay": "08:00", "arrivalTimeDisplay": "08:30",
        "lines": [{"fromStopCode": "ME", "toStopCode": "UN"}]}]}"#;

    #[test]
    fn load_fixtures() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ME-UN.json"), ME_UN).unwrap();
        std::fs::write(dir.path().join("UN-ME.json"), "{}").unwrap();
        std::fs::write(dir.path().join("README.txt"), "not a fixture").unwrap();

        let fixtures = FixtureTimetable::new(dir.path()).unwrap();

        assert_eq!(
            fixtures.available_routes(),
            vec![
                ("ME".to_string(), "UN".to_string()),
                ("UN".to_string(), "ME".to_string()),
            ]
        );
    }

    #[test]
    fn fixture_ignores_date() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ME-UN.json"), ME_UN).unwrap();
        let fixtures = FixtureTimetable::new(dir.path()).unwrap();

        for date in ["2024-11-04", "2031-01-01"] {
            let response = fixtures
                .fetch_timetable(&ScheduleQuery::new("ME", "UN", date))
                .unwrap();
            assert_eq!(response.trips().len(), 1);
        }
    }

    #[test]
    fn unknown_route_is_not_found() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ME-UN.json"), ME_UN).unwrap();
        let fixtures = FixtureTimetable::new(dir.path()).unwrap();

        let err = fixtures
            .fetch_timetable(&ScheduleQuery::new("AL", "UN", "2024-11-04"))
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let err = FixtureTimetable::new(dir.path()).unwrap_err();
        assert!(matches!(err, TimetableError::Fixture { .. }));
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ME-UN.json"), r#"{"trips": 3}"#).unwrap();

        let err = FixtureTimetable::new(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn badly_named_fixture_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("union.json"), ME_UN).unwrap();

        let err = FixtureTimetable::new(dir.path()).unwrap_err();
        assert!(err.to_string().contains("FROM-TO.json"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = FixtureTimetable::new("/nonexistent/fixtures").unwrap_err();
        assert!(matches!(err, TimetableError::Fixture { .. }));
    }
}
