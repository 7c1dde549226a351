pub use race_grid::*;

mod formatters;
mod race_grid;

/// A semantic highlight for a single cell, decoupled from the
/// colors a display chooses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,

    /// Rank or rating got better since the previous race.
    Improved,

    /// Rank or rating got worse since the previous race.
    Worsened,

    /// The competitor gave up.
    Forfeit,

    /// A status or error message shown while no data is available.
    Loading,
}

/// A single table cell: display text plus a semantic highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Cell {
    pub fn plain<T>(text: T) -> Cell
    where
        T: Into<String>,
    {
        Cell {
            text: text.into(),
            emphasis: Emphasis::None,
        }
    }
}

/// A fully laid out table: column labels, plus one row of cells
/// per competitor.
#[derive(Debug, PartialEq)]
pub struct GridWidget {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// A surface the grid can be drawn onto. The presenter never touches
/// the display directly, which keeps it testable in isolation.
pub trait RenderTarget {
    /// Replace the header row.
    fn set_headers(&mut self, labels: &[&'static str]);

    /// Replace all data rows.
    fn set_rows(&mut self, rows: &[Vec<Cell>]);
}
