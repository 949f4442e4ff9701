//! Client core for the FlightPulse status backend.
//!
//! Two query flows share one lifecycle abstraction: [`FlightLookupFlow`]
//! fetches a single flight's status by number and date, and
//! [`AirportSummaryFlow`] fetches aggregated on-time/delayed/cancelled
//! counts for a selected airport. Each flow owns a [`QueryController`] that
//! walks `idle -> loading -> success/error` and guarantees that a stale
//! response can never overwrite the result of a newer request. Presentation
//! layers render whatever [`QueryState`] the flows publish.

use std::time::Duration;

use reqwest::Client;
use url::Url;

pub mod airport_summary;
pub mod disruption;
pub mod error;
pub mod flight_lookup;
pub mod query;

pub use airport_summary::AirportSummaryFlow;
pub use error::{ClientError, QueryError};
pub use flight_lookup::FlightLookupFlow;
pub use query::{FailureMessages, QueryController, QueryPhase, QueryState};

/// Matches the backend's own timeout against its upstream feed.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Entry point to the status backend. Validates the base URL once and hands
/// out query flows that share the same connection pool.
#[derive(Clone)]
pub struct StatusClient {
    http: Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn flight_lookup(&self) -> FlightLookupFlow {
        FlightLookupFlow::new(self.clone())
    }

    pub fn airport_summary(&self) -> AirportSummaryFlow {
        AirportSummaryFlow::new(self.clone())
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
