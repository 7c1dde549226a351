use std::cmp::Ordering;

use crate::network::{RaceSnapshot, Racer};
use crate::widget::formatters::format_duration;
use crate::widget::{Cell, Emphasis, GridWidget};

/// The phase a race is in. The column set is a function of the phase
/// only, never of individual competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceStatus {
    Waiting,
    InProgress,
    Completed,
}

impl RaceStatus {
    /// Parse the wire status. Absent or unknown strings count as waiting.
    pub fn from_wire(status: Option<&str>) -> RaceStatus {
        match status {
            Some("In Progress") => RaceStatus::InProgress,
            Some("Completed") => RaceStatus::Completed,
            _ => RaceStatus::Waiting,
        }
    }
}

/// A competitor, normalized from the wire format.
#[derive(Debug, Default, PartialEq)]
pub struct Competitor {
    pub name: Option<String>,
    pub rank: Option<i64>,
    pub rank_change: Option<i64>,
    pub rating: Option<i64>,
    pub rating_change: Option<i64>,
    pub finish_millis: Option<i64>,
    pub forfeited: bool,
}

impl Competitor {
    fn from_wire(racer: Racer) -> Competitor {
        Competitor {
            name: racer.player_name,
            rank: racer.rank,
            rank_change: racer.rank_change,
            rating: racer.elo,
            rating_change: racer.elo_change,
            finish_millis: racer.finish_time,
            forfeited: racer.forfeited.unwrap_or(false),
        }
    }

    /// Finished or forfeited, for ordering purposes.
    fn is_done(&self) -> bool {
        self.forfeited || self.finish_millis.map(|t| t > 0).unwrap_or(false)
    }
}

/// The column labels for the given race phase.
///
/// `Player`, `Rank` and `Elo` are always present, in that order. Once
/// the race started, a `Final Time` column is appended; once it
/// completed, the rank and rating columns are renamed in place.
pub fn select_headers(status: RaceStatus) -> Vec<&'static str> {
    let mut headers = vec!["Player", "Rank", "Elo"];
    if status == RaceStatus::InProgress || status == RaceStatus::Completed {
        headers.push("Final Time");
    }
    if status == RaceStatus::Completed {
        headers[1] = "Final Rank";
        headers[2] = "Final Elo";
    }
    headers
}

/// Rank competitors during a race: racers still on track keep their
/// order at the top, finished racers follow in ascending finish time,
/// and forfeited racers sink to the bottom. For any other phase the
/// input order is kept as-is.
///
/// The sort is stable, so ties keep their original order.
pub fn order_competitors(mut competitors: Vec<Competitor>, status: RaceStatus) -> Vec<Competitor> {
    if status != RaceStatus::InProgress {
        return competitors;
    }
    competitors.sort_by(|a, b| match (a.is_done(), b.is_done()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => match (a.forfeited, b.forfeited) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
            (false, false) => a
                .finish_millis
                .unwrap_or(0)
                .cmp(&b.finish_millis.unwrap_or(0)),
        },
    });
    competitors
}

/// Build the cells of one competitor's row, matching the column set
/// of `select_headers` for the same phase.
pub fn build_row(competitor: &Competitor, status: RaceStatus) -> Vec<Cell> {
    let mut row = Vec::with_capacity(4);

    row.push(Cell::plain(
        competitor.name.clone().unwrap_or_else(|| "—".to_string()),
    ));

    if status == RaceStatus::Completed {
        row.push(rank_cell(competitor));
        row.push(rating_cell(competitor));
    } else {
        row.push(Cell::plain(number_or_dash(competitor.rank)));
        row.push(Cell::plain(number_or_dash(competitor.rating)));
    }

    if status == RaceStatus::InProgress || status == RaceStatus::Completed {
        row.push(time_cell(competitor));
    }

    row
}

/// Lay out the full grid for one snapshot.
pub fn present(snapshot: RaceSnapshot) -> GridWidget {
    let status = RaceStatus::from_wire(snapshot.race_status.as_deref());

    let competitors = snapshot
        .racers
        .unwrap_or_default()
        .into_iter()
        .map(Competitor::from_wire)
        .collect();
    let competitors = order_competitors(competitors, status);

    GridWidget {
        headers: select_headers(status),
        rows: competitors
            .iter()
            .map(|c| build_row(c, status))
            .collect(),
    }
}

/// A fallback grid carrying a single message row, used whenever no
/// snapshot could be fetched.
pub fn present_error(message: &str) -> GridWidget {
    GridWidget {
        headers: vec!["Player", "Rank", "Elo"],
        rows: vec![vec![Cell {
            text: message.to_string(),
            emphasis: Emphasis::Loading,
        }]],
    }
}

fn number_or_dash(n: Option<i64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())
}

/// The rank cell of a completed race, annotated with the rank delta.
///
/// A drop in the numeric rank is an improvement (rank 1 beats rank 5),
/// so negative deltas get the upwards arrow and the improved highlight.
fn rank_cell(competitor: &Competitor) -> Cell {
    let rank = competitor
        .rank
        .map(|r| r.to_string())
        .unwrap_or_default();
    match competitor.rank_change {
        Some(change) if change != 0 => {
            let arrow = if change > 0 { "↓" } else { "↑" };
            let emphasis = if change < 0 {
                Emphasis::Improved
            } else {
                Emphasis::Worsened
            };
            Cell {
                text: format!("{} ({}{})", rank, arrow, change.abs()),
                emphasis,
            }
        }
        _ => Cell::plain(rank),
    }
}

/// The rating cell of a completed race, annotated with the Elo delta.
fn rating_cell(competitor: &Competitor) -> Cell {
    let rating = number_or_dash(competitor.rating);
    match competitor.rating_change {
        Some(change) if change != 0 => {
            let sign = if change > 0 { "+" } else { "" };
            let emphasis = if change > 0 {
                Emphasis::Improved
            } else {
                Emphasis::Worsened
            };
            Cell {
                text: format!("{} ({}{})", rating, sign, change),
                emphasis,
            }
        }
        _ => Cell::plain(rating),
    }
}

fn time_cell(competitor: &Competitor) -> Cell {
    if competitor.forfeited {
        return Cell {
            text: "Forfeit".to_string(),
            emphasis: Emphasis::Forfeit,
        };
    }
    Cell::plain(format_duration(competitor.finish_millis))
}
