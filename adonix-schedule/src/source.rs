use log::debug;
use thiserror::Error;

use crate::structs::{Event, Schedule};

/// Fixed upstream endpoint serving the full event list.
pub const SCHEDULE_ENDPOINT: &str = "https://adonix.hackillinois.org/event/";

/// Failure of a single fetch attempt. Callers do not branch on the variant:
/// either way the schedule becomes unavailable until the next refresh.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("schedule request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("schedule response did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the event list from the schedule endpoint. One GET per call,
/// single attempt, transport-default timeout, no retry.
pub struct EventSource {
    client: reqwest::Client,
    endpoint: String,
}

impl EventSource {
    pub fn new() -> Self {
        Self::with_endpoint(SCHEDULE_ENDPOINT)
    }

    /// Point the source at a different endpoint (tests, staging).
    pub fn with_endpoint<S: Into<String>>(endpoint: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch and decode the full event list, in wire order. Sorting is the
    /// caller's job.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        debug!("requesting schedule from {}", self.endpoint);

        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let schedule: Schedule = serde_json::from_str(&body)?;
        debug!("decoded {} events", schedule.events.len());

        Ok(schedule.events)
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}
