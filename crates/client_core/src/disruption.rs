//! Status-vocabulary classification behind the disruption banner.
//!
//! Kept as a plain substring rule with no fetch or state dependencies, so
//! the vocabulary can be revisited when the backend's status labels drift.

use shared::protocol::FlightRecord;

const DISRUPTIVE_MARKERS: [&str; 3] = ["cancelled", "diverted", "delayed"];

/// True when a reported status describes a disrupted flight.
///
/// Case-insensitive substring match; an empty status is not disruptive.
pub fn is_disrupted(status: &str) -> bool {
    let lowered = status.to_lowercase();
    DISRUPTIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Record-level convenience: a flight with no reported status is treated as
/// not disrupted.
pub fn record_is_disrupted(record: &FlightRecord) -> bool {
    record.status.as_deref().map(is_disrupted).unwrap_or(false)
}
