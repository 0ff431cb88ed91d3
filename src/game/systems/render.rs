//! Diagnostic text rendering of the grid.
//!
//! One line per row: a two-digit row index followed by one character per cell
//! (`.` empty, `P` player, `W` wall, `B` bomb). Output is for debugging only.

use log::{log_enabled, trace, Level};

use crate::game::grid::Grid;

pub fn grid_as_text(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.size() * (grid.size() + 3));
    for (y, row) in grid.rows().iter().enumerate() {
        text.push_str(&format!("{:02}", y));
        for tile in row {
            text.push(tile.occupant().map_or('.', |e| e.symbol()));
        }
        text.push('\n');
    }
    text
}

/// Print the grid at trace level.
pub fn log_grid(grid: &Grid) {
    if log_enabled!(Level::Trace) {
        trace!("[Render] Grid:\n{}", grid_as_text(grid));
    }
}
