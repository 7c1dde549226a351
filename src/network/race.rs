use serde::Deserialize;
use thiserror::Error;

use crate::network::HTTP_CLIENT;

/// Possible errors when querying the race API.
#[derive(Error, Debug)]
pub enum RaceError {
    /// The endpoint answered, but not with a success status.
    #[error("race API responded with status {code} ({reason})")]
    BadStatus { code: u16, reason: String },

    /// Wrong endpoint, or maybe not available right now.
    #[error("race API request failed")]
    RequestError(#[from] reqwest::Error),

    /// Likely a bug on our end, or on the API's.
    #[error("failed to parse race API response")]
    ParseError(#[from] serde_json::Error),
}

/// One poll's full race state, replacing all prior state.
///
/// Every field is optional on the wire: missing fields fall back to
/// defaults during presentation, and are never treated as errors.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct RaceSnapshot {
    /// "Waiting for Players", "In Progress", or "Completed".
    /// Anything else counts as waiting.
    pub race_status: Option<String>,

    /// The competitors, in the order the API ranks them.
    pub racers: Option<Vec<Racer>>,
}

/// A single competitor within a snapshot. Racers have no identity
/// beyond their position; nothing persists between polls.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Racer {
    pub player_name: Option<String>,

    pub rank: Option<i64>,

    /// Signed rank delta since the previous race. Note that a
    /// negative delta is an improvement: rank 1 beats rank 5.
    pub rank_change: Option<i64>,

    pub elo: Option<i64>,

    pub elo_change: Option<i64>,

    /// Finish time in milliseconds; positive once the racer finished.
    pub finish_time: Option<i64>,

    /// Forfeited racers count as done, whatever their finish time.
    pub forfeited: Option<bool>,
}

/// Fetch the current race snapshot.
pub async fn fetch_race_snapshot(url: &str) -> Result<RaceSnapshot, RaceError> {
    log::debug!("fetch race snapshot from {}", url);
    let response = HTTP_CLIENT.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RaceError::BadStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let json: String = response.text().await?;
    Ok(serde_json::from_str(&json)?)
}
