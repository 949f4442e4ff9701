//! Plain-text rendering of query states.

use chrono::NaiveDateTime;
use client_core::{disruption, QueryState};
use shared::domain::StatusBucket;
use shared::protocol::{DashboardSummary, FlightRecord};

pub fn flight_state(state: &QueryState<FlightRecord>) {
    match state {
        QueryState::Idle | QueryState::Loading => println!("Checking flight status..."),
        QueryState::Error(message) => println!("{message}"),
        QueryState::Success(record) => flight_record(record),
    }
}

fn flight_record(record: &FlightRecord) {
    println!(
        "Flight {} - {}",
        record.flight_number,
        record.airline.as_deref().unwrap_or("unknown airline")
    );

    if disruption::record_is_disrupted(record) {
        let status = record.status.as_deref().unwrap_or_default();
        println!("Disruption Alert: This flight is {}", status.to_uppercase());
    }

    println!("Status:    {}", record.status.as_deref().unwrap_or("unknown"));
    println!(
        "Departure: {} at {}",
        record.departure.as_deref().unwrap_or("unknown"),
        format_time(record.departure_time)
    );
    println!(
        "Arrival:   {} at {}",
        record.arrival.as_deref().unwrap_or("unknown"),
        format_time(record.arrival_time)
    );
    println!("Aircraft:  {}", record.aircraft.as_deref().unwrap_or("unknown"));
}

pub fn dashboard_state(state: &QueryState<DashboardSummary>) {
    match state {
        QueryState::Idle | QueryState::Loading => println!("Loading summary..."),
        QueryState::Error(message) => println!("{message}"),
        QueryState::Success(summary) => dashboard_summary(summary),
    }
}

fn dashboard_summary(summary: &DashboardSummary) {
    println!("Flight Status Dashboard - {}", summary.airport);
    for bucket in StatusBucket::ALL {
        println!(
            "{:>9}: {}",
            bucket.label().to_uppercase(),
            summary.counts.get(bucket)
        );
    }
}

fn format_time(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unscheduled".to_string())
}
