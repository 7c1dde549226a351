use std::time::Duration;

use crate::config::Config;
use crate::network::{fetch_race_snapshot, RaceError};
use crate::widget::{present, present_error, GridWidget, RenderTarget};

/// Shown when the endpoint cannot be reached, or its response cannot
/// be understood.
const CONNECT_ERROR_MSG: &str = "Could not reach the race API. Check the configured URL.";

/// Drives the poll loop: fetch a snapshot, lay out the grid, draw it.
///
/// Every cycle is independent; a failed poll draws an error table and
/// the next tick starts over. Stopping the loop is the only
/// cancellation semantic; in-flight requests are not aborted.
pub struct GridController {
    race_url: String,
    poll_interval: Duration,
    target: Box<dyn RenderTarget>,
}

impl GridController {
    pub fn new(config: &Config, target: Box<dyn RenderTarget>) -> GridController {
        GridController {
            race_url: config.race_url(),
            poll_interval: Duration::from_millis(config.poll_interval_millis),
            target,
        }
    }

    /// Poll indefinitely. The first poll happens right away.
    pub async fn run(&mut self) {
        let mut ticks = tokio::time::interval(self.poll_interval);
        loop {
            ticks.tick().await;
            self.poll_once().await;
        }
    }

    async fn poll_once(&mut self) {
        let grid = match fetch_race_snapshot(&self.race_url).await {
            Ok(snapshot) => present(snapshot),
            Err(err) => {
                log::warn!("race poll failed: {}", err);
                present_error(&error_message(&err))
            }
        };
        self.draw(&grid);
    }

    fn draw(&mut self, grid: &GridWidget) {
        self.target.set_headers(&grid.headers);
        self.target.set_rows(&grid.rows);
    }
}

/// The message displayed in place of the grid for a failed poll.
fn error_message(err: &RaceError) -> String {
    match err {
        RaceError::BadStatus { code, reason } => format!("Error {}: {}", code, reason),
        _ => CONNECT_ERROR_MSG.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::widget::{Cell, Emphasis};

    #[test]
    fn test_bad_status_message() {
        let err = RaceError::BadStatus {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!("Error 503: Service Unavailable", error_message(&err));
    }

    #[test]
    fn test_bad_status_renders_a_message_grid() {
        let err = RaceError::BadStatus {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        let grid = present_error(&error_message(&err));

        assert_eq!(vec!["Player", "Rank", "Elo"], grid.headers);
        assert_eq!(
            vec![vec![Cell {
                text: "Error 503: Service Unavailable".to_string(),
                emphasis: Emphasis::Loading,
            }]],
            grid.rows
        );
    }

    #[test]
    fn test_parse_failure_maps_to_connectivity_message() {
        let err = RaceError::from(
            serde_json::from_str::<crate::network::RaceSnapshot>("not json").unwrap_err(),
        );
        assert_eq!(CONNECT_ERROR_MSG, error_message(&err));
    }
}
