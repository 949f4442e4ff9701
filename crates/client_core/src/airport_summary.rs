//! Aggregated airport dashboard summary.

use shared::domain::Airport;
use shared::protocol::{DashboardResponse, DashboardSummary};
use tokio::sync::{watch, Mutex};
use tracing::debug;

use crate::query::{FailureMessages, QueryController, QueryState};
use crate::StatusClient;

const MESSAGES: FailureMessages = FailureMessages {
    not_found: "Unable to fetch summary data.",
    backend: "Unable to fetch summary data.",
    transport: "Unable to reach the flight status service.",
    parse: "Unable to fetch summary data.",
};

/// Fetches on-time/delayed/cancelled counts for the selected airport.
///
/// Selecting an airport is the trigger: every selection change re-runs the
/// query, and only the newest selection's result can land. No local
/// validation exists because [`Airport`] only admits valid codes.
pub struct AirportSummaryFlow {
    client: StatusClient,
    controller: QueryController<DashboardSummary>,
    selected: Mutex<Airport>,
}

impl AirportSummaryFlow {
    pub(crate) fn new(client: StatusClient) -> Self {
        Self {
            client,
            controller: QueryController::new(MESSAGES),
            selected: Mutex::new(Airport::default()),
        }
    }

    pub fn state(&self) -> QueryState<DashboardSummary> {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<DashboardSummary>> {
        self.controller.subscribe()
    }

    pub async fn selected(&self) -> Airport {
        *self.selected.lock().await
    }

    /// Switch the dashboard to `airport` and fetch its summary.
    pub async fn select(&self, airport: Airport) -> QueryState<DashboardSummary> {
        *self.selected.lock().await = airport;
        self.fetch(airport).await
    }

    /// Re-run the query for the current selection.
    pub async fn refresh(&self) -> QueryState<DashboardSummary> {
        let airport = *self.selected.lock().await;
        self.fetch(airport).await
    }

    async fn fetch(&self, airport: Airport) -> QueryState<DashboardSummary> {
        debug!(airport = %airport, "fetching dashboard summary");
        let url = self.client.endpoint("dashboard-flights");
        self.controller
            .run(
                self.client.http(),
                |http| http.get(url).query(&[("airport", airport.code())]),
                move |response: DashboardResponse| {
                    Ok(DashboardSummary {
                        airport,
                        counts: response.summary,
                    })
                },
            )
            .await
    }
}
