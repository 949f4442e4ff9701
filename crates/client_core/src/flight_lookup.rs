//! Single-flight status lookup.

use chrono::NaiveDate;
use shared::protocol::FlightRecord;
use tokio::sync::watch;
use tracing::debug;

use crate::query::{FailureMessages, QueryController, QueryState};
use crate::StatusClient;

pub const ENTER_FLIGHT_NUMBER: &str = "Please enter a valid flight number (e.g. DL345).";
pub const SELECT_DATE: &str = "Please select a date.";

const MESSAGES: FailureMessages = FailureMessages {
    not_found: "No flight data found for this flight.",
    backend: "Flight not found or backend error.",
    transport: "Unable to reach the flight status service.",
    parse: "Unexpected response from the flight status service.",
};

const DATE_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Fetches one flight's record by number and date.
pub struct FlightLookupFlow {
    client: StatusClient,
    controller: QueryController<FlightRecord>,
}

impl FlightLookupFlow {
    pub(crate) fn new(client: StatusClient) -> Self {
        Self {
            client,
            controller: QueryController::new(MESSAGES),
        }
    }

    pub fn state(&self) -> QueryState<FlightRecord> {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<FlightRecord>> {
        self.controller.subscribe()
    }

    /// Look up one flight by number and calendar date.
    ///
    /// Bad local input resolves to the error phase without a network call;
    /// the date is normalized to `YYYY-MM-DD` before it reaches the wire.
    pub async fn lookup(&self, flight_number: &str, date: Option<&str>) -> QueryState<FlightRecord> {
        let flight_number = flight_number.trim();
        if flight_number.is_empty() {
            return self.controller.reject(ENTER_FLIGHT_NUMBER).await;
        }
        let Some(date) = date.map(str::trim).and_then(parse_query_date) else {
            return self.controller.reject(SELECT_DATE).await;
        };
        let date = date.format("%Y-%m-%d").to_string();

        debug!(flight_number, date, "checking flight status");
        let url = self.client.endpoint("check-flight");
        self.controller
            .run(
                self.client.http(),
                |http| {
                    http.get(url)
                        .query(&[("flightNumber", flight_number), ("date", date.as_str())])
                },
                Ok,
            )
            .await
    }
}

fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_and_us_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_query_date("2024-03-01"), expected);
        assert_eq!(parse_query_date("03/01/2024"), expected);
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert_eq!(parse_query_date(""), None);
        assert_eq!(parse_query_date("next tuesday"), None);
        assert_eq!(parse_query_date("2024-13-40"), None);
    }
}
