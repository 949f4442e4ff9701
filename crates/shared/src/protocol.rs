use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Airport, StatusBucket};

/// One flight's current status as reported by the backend.
///
/// Every field except the flight number is optional: the backend forwards
/// whatever the upstream feed knows and emits JSON `null` for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(default, with = "local_timestamp", skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(default, with = "local_timestamp", skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
}

/// Flight counts per status bucket for one airport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub on_time: u64,
    pub delayed: u64,
    pub cancelled: u64,
}

impl StatusCounts {
    pub fn get(&self, bucket: StatusBucket) -> u64 {
        match bucket {
            StatusBucket::OnTime => self.on_time,
            StatusBucket::Delayed => self.delayed,
            StatusBucket::Cancelled => self.cancelled,
        }
    }

    pub fn total(&self) -> u64 {
        self.on_time + self.delayed + self.cancelled
    }
}

/// Wire envelope of `GET /dashboard-flights`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub summary: StatusCounts,
}

/// Aggregated counts for the most recently selected airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub airport: Airport,
    pub counts: StatusCounts,
}

/// Zone-less local timestamps as the backend emits them.
///
/// The upstream feed reports scheduled times in airport-local form, usually
/// `2025-07-11T14:00`, occasionally with seconds or with a UTC offset
/// appended. All three shapes must deserialize.
pub mod local_timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M";
    const READ_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        for format in READ_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(parsed);
            }
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|stamped| stamped.naive_local())
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => {
                serializer.serialize_str(&timestamp.format(WRITE_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn flight_record_deserializes_with_null_fields() {
        let record: FlightRecord = serde_json::from_value(serde_json::json!({
            "flight_number": "DL345",
            "airline": "Delta Air Lines",
            "status": null,
            "departure": "Atlanta Hartsfield",
            "departure_time": "2025-07-11T14:00",
            "arrival": null,
            "arrival_time": null,
            "aircraft": null,
        }))
        .expect("record");

        assert_eq!(record.flight_number, "DL345");
        assert_eq!(record.status, None);
        assert_eq!(
            record.departure_time,
            NaiveDate::from_ymd_opt(2025, 7, 11).and_then(|d| d.and_hms_opt(14, 0, 0)),
        );
    }

    #[test]
    fn local_timestamp_accepts_all_reported_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 11).and_then(|d| d.and_hms_opt(14, 0, 0));
        assert_eq!(local_timestamp::parse("2025-07-11T14:00"), expected);
        assert_eq!(local_timestamp::parse("2025-07-11T14:00:00"), expected);
        assert_eq!(local_timestamp::parse("2025-07-11T14:00:00+03:00"), expected);
        assert_eq!(local_timestamp::parse("half past two"), None);
    }

    #[test]
    fn missing_timestamp_field_deserializes_as_none() {
        let record: FlightRecord =
            serde_json::from_value(serde_json::json!({ "flight_number": "ZZ000" }))
                .expect("record");
        assert_eq!(record.departure_time, None);
        assert_eq!(record.arrival_time, None);
    }

    #[test]
    fn status_counts_survive_a_serde_round_trip() {
        let counts = StatusCounts { on_time: 10, delayed: 2, cancelled: 1 };
        let encoded = serde_json::to_string(&DashboardResponse { summary: counts })
            .expect("encode");
        let decoded: DashboardResponse = serde_json::from_str(&encoded).expect("decode");

        assert_eq!(decoded.summary, counts);
        assert_eq!(decoded.summary.get(StatusBucket::OnTime), 10);
        assert_eq!(decoded.summary.get(StatusBucket::Delayed), 2);
        assert_eq!(decoded.summary.get(StatusBucket::Cancelled), 1);
        assert_eq!(decoded.summary.total(), 13);
    }

    #[test]
    fn dashboard_envelope_matches_backend_shape() {
        let decoded: DashboardResponse = serde_json::from_str(
            r#"{"summary":{"on_time":4,"delayed":1,"cancelled":0}}"#,
        )
        .expect("decode");
        assert_eq!(decoded.summary.on_time, 4);
    }
}
