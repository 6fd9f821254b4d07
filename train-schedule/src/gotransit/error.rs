//! Timetable source error types.

/// Errors from fetching a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not a valid timetable
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Fixture directory could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

impl TimetableError {
    /// The HTTP status, for status failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            TimetableError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
