use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Docker writes this for timestamps that never happened, e.g. `FinishedAt`
/// of a container that is still running.
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The subset of `docker inspect` that the app displays.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InspectRecord {
    pub container_id: String,
    pub status: String,
    pub running: bool,
    pub paused: bool,
    pub restarting: bool,
    pub created: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub image: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct RawInspect {
    created: String,
    state: RawState,
    image: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct RawState {
    status: String,
    running: bool,
    paused: bool,
    restarting: bool,
    #[serde(default)]
    started_at: String,
    #[serde(default)]
    finished_at: String,
}

/// Parses the JSON array printed by `docker inspect <id>`, using its first
/// element.
pub fn parse_inspect(container_id: &str, body: &str) -> Result<InspectRecord> {
    let mut items = serde_json::from_str::<Vec<RawInspect>>(body).context("unexpected docker inspect output")?;
    if items.is_empty() {
        return Err(anyhow!("docker inspect returned no object for {}", container_id));
    }
    let raw = items.swap_remove(0);
    Ok(InspectRecord {
        container_id: container_id.to_string(),
        status: raw.state.status,
        running: raw.state.running,
        paused: raw.state.paused,
        restarting: raw.state.restarting,
        created: normalize_timestamp(&raw.created)?,
        started_at: normalize_timestamp(&raw.state.started_at)?,
        finished_at: normalize_timestamp(&raw.state.finished_at)?,
        image: raw.image,
    })
}

/// Formats an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`, dropping the
/// fractional seconds and the zone suffix. The wall-clock value is kept as
/// written, no zone conversion happens.
///
/// Empty strings and [`ZERO_TIMESTAMP`] have no value.
pub fn normalize_timestamp(iso_time: &str) -> Result<Option<String>> {
    let iso_time = iso_time.trim();
    if iso_time.is_empty() || iso_time == ZERO_TIMESTAMP {
        return Ok(None);
    }
    let naive = match DateTime::parse_from_rfc3339(iso_time) {
        Ok(date_time) => date_time.naive_local(),
        Err(_) => NaiveDateTime::parse_from_str(iso_time, "%Y-%m-%dT%H:%M:%S%.f")
            .with_context(|| format!("invalid timestamp: {}", iso_time))?,
    };
    Ok(Some(naive.format(DISPLAY_TIME_FORMAT).to_string()))
}
