use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Airports the dashboard can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Airport {
    Atl,
    Jfk,
    Lax,
    Ord,
}

impl Airport {
    pub const ALL: [Airport; 4] = [Airport::Atl, Airport::Jfk, Airport::Lax, Airport::Ord];

    /// Wire spelling of the code, as the backend expects it.
    pub fn code(&self) -> &'static str {
        match self {
            Airport::Atl => "ATL",
            Airport::Jfk => "JFK",
            Airport::Lax => "LAX",
            Airport::Ord => "ORD",
        }
    }
}

impl Default for Airport {
    fn default() -> Self {
        Airport::Atl
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown airport code '{0}' (expected one of ATL, JFK, LAX, ORD)")]
pub struct AirportParseError(pub String);

impl FromStr for Airport {
    type Err = AirportParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ATL" => Ok(Airport::Atl),
            "JFK" => Ok(Airport::Jfk),
            "LAX" => Ok(Airport::Lax),
            "ORD" => Ok(Airport::Ord),
            _ => Err(AirportParseError(raw.to_string())),
        }
    }
}

/// Aggregation categories used by the airport dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    OnTime,
    Delayed,
    Cancelled,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 3] =
        [StatusBucket::OnTime, StatusBucket::Delayed, StatusBucket::Cancelled];

    /// Human-readable label, e.g. "on time".
    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::OnTime => "on time",
            StatusBucket::Delayed => "delayed",
            StatusBucket::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
