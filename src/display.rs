use std::io::Write;

use crate::config::Theme;
use crate::widget::{Cell, Emphasis, RenderTarget};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

/// Draws the grid into the terminal with ANSI colors.
///
/// Headers and rows are kept between updates, so that replacing
/// either redraws the whole table.
pub struct TerminalGrid {
    theme: Theme,
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl TerminalGrid {
    pub fn new(theme: Theme) -> TerminalGrid {
        TerminalGrid {
            theme,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn redraw(&self) {
        let widths = self.column_widths();
        let mut out = String::from(ANSI_CLEAR);

        out.push_str(self.header_color());
        for (idx, label) in self.headers.iter().enumerate() {
            push_padded(&mut out, label, widths[idx]);
        }
        out.push_str(ANSI_RESET);
        out.push('\n');

        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let color = emphasis_color(cell.emphasis);
                out.push_str(color);
                push_padded(&mut out, &cell.text, widths.get(idx).copied().unwrap_or(0));
                if !color.is_empty() {
                    out.push_str(ANSI_RESET);
                }
            }
            out.push('\n');
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(out.as_bytes());
        let _ = handle.flush();
    }

    /// Each column is as wide as its widest cell, header included.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|label| label.chars().count())
            .collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let width = cell.text.chars().count();
                if idx == widths.len() {
                    widths.push(width);
                } else if width > widths[idx] {
                    widths[idx] = width;
                }
            }
        }
        widths
    }

    fn header_color(&self) -> &'static str {
        match self.theme {
            Theme::Blue => "\x1b[1;34m",
            Theme::Light => "\x1b[1;30m",
            Theme::Dark => "\x1b[1;37m",
        }
    }
}

impl RenderTarget for TerminalGrid {
    fn set_headers(&mut self, labels: &[&'static str]) {
        self.headers = labels.to_vec();
        self.redraw();
    }

    fn set_rows(&mut self, rows: &[Vec<Cell>]) {
        self.rows = rows.to_vec();
        self.redraw();
    }
}

/// Pad with spaces to the column width, plus two spaces of gutter.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let padding = width.saturating_sub(text.chars().count()) + 2;
    for _ in 0..padding {
        out.push(' ');
    }
}

fn emphasis_color(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::None => "",
        Emphasis::Improved => "\x1b[32m",
        Emphasis::Worsened => "\x1b[31m",
        Emphasis::Forfeit => "\x1b[33m",
        Emphasis::Loading => "\x1b[2m",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_column_widths_cover_headers_and_rows() {
        let mut grid = TerminalGrid::new(Theme::Blue);
        grid.headers = vec!["Player", "Rank"];
        grid.rows = vec![vec![
            Cell::plain("a very long player name"),
            Cell::plain("1"),
            Cell::plain("extra"),
        ]];

        assert_eq!(vec![23, 4, 5], grid.column_widths());
    }
}
