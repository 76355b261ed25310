//! DTOs for the diagnostic endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /healthz`. Never touches the store.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthzResponse {
    pub ok: bool,
    pub version: String,
    pub now: DateTime<Utc>,
    pub uptime_sec: u64,
    pub env: String,
}

/// Response of `GET /api/dbcheck`.
///
/// Untagged so both shapes share the `ok` discriminator field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DbCheckResponse {
    Healthy {
        ok: bool,
        now: DateTime<Utc>,
        #[serde(rename = "linkCount")]
        link_count: i64,
    },
    Failed {
        ok: bool,
        error: String,
    },
}

impl DbCheckResponse {
    pub fn healthy(now: DateTime<Utc>, link_count: i64) -> Self {
        Self::Healthy {
            ok: true,
            now,
            link_count,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            ok: false,
            error: error.into(),
        }
    }
}
