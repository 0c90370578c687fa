//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices, in the order the engine scans them
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the first line fully occupied by a single mark.
///
/// The scan order is fixed (rows, columns, diagonals) so the reported line
/// is stable for highlighting even when two lines complete at once.
pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|line| {
        let first = cells[line[0]];
        first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first)
    })
}

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
