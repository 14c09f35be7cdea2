use std::{fmt::Display, ops::Not, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 1024;

/// Number of cells on a board of side `size`, or `InvalidBoardSize` when no
/// such board can be built.
pub fn cell_count(size: usize) -> Result<usize, GameError> {
    if !(1..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidBoardSize(size));
    }
    size.checked_mul(size).ok_or(GameError::InvalidBoardSize(size))
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Marker {
    /// Player one.
    #[default]
    X,
    /// Player two.
    O,
}

impl Not for Marker {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

impl FromStr for Marker {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Marker::X),
            "o" | "O" => Ok(Marker::O),
            other => Err(GameError::UnknownMarker(other.to_string())),
        }
    }
}

// x is the column, y the row; row 0 is drawn at the top.
//
//    y
//    0│ 0 1 2
//    1│ 3 4 5
//    2│ 6 7 8
//       0 1 2 : x
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Marker>>,
}

// unchecked wire shape, only turned into a `Board` through `TryFrom`
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Option<Marker>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.size)?;
        if raw.cells.len() != expected {
            return Err(GameError::CellCountMismatch {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            size,
            cells: vec![None; cell_count(size)?],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Option<Marker>, GameError> {
        let index = self.index_of(x, y)?;
        Ok(self.cells[index])
    }

    /// Returns a copy of the board with `marker` placed at `(x, y)`.
    /// The receiver is left untouched so older snapshots stay valid.
    pub fn set(&self, x: usize, y: usize, marker: Marker) -> Result<Self, GameError> {
        let index = self.index_of(x, y)?;
        let mut next = self.clone();
        next.cells[index] = Some(marker);
        Ok(next)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == self.cells.len()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Option<Marker>] {
        &self.cells
    }

    pub(crate) fn at(&self, x: usize, y: usize) -> Option<Marker> {
        self.cells[y * self.size + x]
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x >= self.size || y >= self.size {
            return Err(GameError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.size - 1).to_string().len();
        for (y, row) in self.cells.chunks_exact(self.size).enumerate() {
            write!(f, "{y:>width$}│")?;
            for tile in row {
                match tile {
                    Some(marker) => write!(f, " {marker:>width$}")?,
                    None => write!(f, " {:>width$}", "-")?,
                };
            }
            writeln!(f)?;
        }

        write!(f, "{:>width$}╰", "")?;
        for _ in 0..self.size * (width + 1) {
            write!(f, "─")?;
        }
        write!(f, "\n{:>width$} ", "")?;
        for x in 0..self.size {
            write!(f, " {x:>width$}")?;
        }
        Ok(())
    }
}
