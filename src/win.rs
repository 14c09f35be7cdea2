//! Win detection over an N×N board.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Marker};

/// One of the `2 * size + 2` lines that can win a game.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// (0, 0) to (n-1, n-1).
    Diagonal,
    /// (0, n-1) to (n-1, 0).
    AntiDiagonal,
}

impl Line {
    /// Every candidate line of a board, in the order they are checked.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The `(x, y)` cells making up this line.
    pub fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Row(y) => (i, y),
            Line::Column(x) => (x, i),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(y) => write!(f, "row {y}"),
            Line::Column(x) => write!(f, "column {x}"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Returns the marker of the first complete line, if any.
///
/// A full board without a line is not a win; telling a draw apart from a
/// game still in progress is left to the caller.
pub fn find_winner(board: &Board) -> Option<Marker> {
    winning_line(board).map(|(marker, _)| marker)
}

/// Like [`find_winner`] but also reports which line completed.
///
/// Rows are checked first, then columns, then the diagonal and finally the
/// anti-diagonal, so the result is deterministic even on boards holding
/// more than one complete line.
pub fn winning_line(board: &Board) -> Option<(Marker, Line)> {
    let size = board.size();
    // nobody can have a full line before placing `size` markers
    if board.mark_count() < size {
        return None;
    }

    Line::all(size).find_map(|line| {
        let marker = line_owner(board, line)?;
        debug!(%marker, %line, "winning line found");
        Some((marker, line))
    })
}

fn line_owner(board: &Board, line: Line) -> Option<Marker> {
    let mut cells = line.cells(board.size()).map(|(x, y)| board.at(x, y));
    let first = cells.next()??;
    cells.all(|cell| cell == Some(first)).then_some(first)
}
