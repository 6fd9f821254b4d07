//! GO Transit timetable HTTP client.
//!
//! Issues a single unauthenticated GET per query and decodes the body into
//! [`TimetableResponse`]. There is no retry: one attempt, one answer.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::domain::ScheduleQuery;

use super::error::TimetableError;
use super::types::TimetableResponse;

/// Default base URL for the GO Transit schedules API.
const DEFAULT_BASE_URL: &str = "https://api.gotransit.com/v2/schedules";

/// Default language segment of the timetable path.
const DEFAULT_LANGUAGE: &str = "en";

/// How much of an undecodable body to keep in the error.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct TimetableConfig {
    /// Base URL for the API (defaults to production GO Transit)
    pub base_url: String,
    /// Language path segment ("en" or "fr")
    pub language: String,
    /// Request timeout in seconds; `None` keeps the HTTP client's default
    pub timeout_secs: Option<u64>,
}

impl TimetableConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the language segment.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Full URL of the timetable endpoint, without query string.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/timetable/all",
            self.base_url.trim_end_matches('/'),
            self.language
        )
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GO Transit timetable API client.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TimetableClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TimetableConfig) -> Result<Self, TimetableError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint(),
        })
    }

    /// Build the GET request for a query.
    ///
    /// Departure, destination and date are percent-encoded independently.
    pub fn timetable_request(
        &self,
        query: &ScheduleQuery,
    ) -> Result<reqwest::Request, TimetableError> {
        let request = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("fromStop", query.departure.as_str()),
                ("toStop", query.destination.as_str()),
                ("date", query.date.as_str()),
            ])
            .build()?;

        Ok(request)
    }

    /// Fetch the full timetable for a query.
    ///
    /// Anything other than 200 OK is a [`TimetableError::Status`], carrying
    /// the response body as its message.
    pub async fn fetch_timetable(
        &self,
        query: &ScheduleQuery,
    ) -> Result<TimetableResponse, TimetableError> {
        let request = self.timetable_request(query)?;
        debug!(url = %request.url(), "requesting timetable");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TimetableError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TimetableError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}
