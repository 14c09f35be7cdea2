use thiserror::Error;

/// Reasons the core rejects a request. None of these are fatal; the
/// renderer decides whether to show them or drop the intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("co-ordinates [{x},{y}] fall outside of a {size}-sized board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("cell [{x},{y}] is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("the game is over")]
    GameOver,

    #[error("history index {index} is out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown marker {0:?}")]
    UnknownMarker(String),

    #[error("board size must be between 1 and 1024, got {0}")]
    InvalidBoardSize(usize),

    #[error("a {size}-sized board cannot hold {cells} cells")]
    CellCountMismatch { size: usize, cells: usize },

    #[error("invalid input {0:?}")]
    InvalidIntent(String),
}
