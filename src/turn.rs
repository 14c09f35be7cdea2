use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    board::{Board, Marker},
    error::GameError,
    win::find_winner,
};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Marker),
    Drawn,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }

    /// Status of an arbitrary position.
    pub fn of(board: &Board) -> Self {
        if let Some(marker) = find_winner(board) {
            GameStatus::Won(marker)
        } else if board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(marker) => write!(f, "{marker} won"),
            GameStatus::Drawn => write!(f, "draw"),
        }
    }
}

/// One placement. Only ever built for a cell that was empty and on the board.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub marker: Marker,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at [{},{}]", self.marker, self.x, self.y)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TurnOutcome {
    pub board: Board,
    pub applied: Move,
    pub next_player: Marker,
    pub status: GameStatus,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct TurnController {
    status: GameStatus,
}

impl TurnController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up the state machine at an existing position, e.g. after
    /// rewinding the history to an earlier board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            status: GameStatus::of(board),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Validates and applies a move for `player`.
    ///
    /// Fails without touching any state if the game is already decided,
    /// the coordinates are off the board, or the cell is taken (checked in
    /// that order).
    #[instrument(skip(self, board), fields(status = ?self.status))]
    pub fn attempt_move(
        &mut self,
        board: &Board,
        x: usize,
        y: usize,
        player: Marker,
    ) -> Result<TurnOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if board.get(x, y)?.is_some() {
            return Err(GameError::CellOccupied { x, y });
        }

        let board = board.set(x, y, player)?;
        let status = GameStatus::of(&board);
        if status.is_over() {
            info!(%status, "game concluded");
        }
        self.status = status;

        Ok(TurnOutcome {
            board,
            applied: Move { x, y, marker: player },
            next_player: !player,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> (TurnController, Board, Marker) {
        let mut turn = TurnController::new();
        let mut board = Board::new(3).unwrap();
        let mut player = Marker::X;
        for &(x, y) in moves {
            let outcome = turn.attempt_move(&board, x, y, player).unwrap();
            board = outcome.board;
            player = outcome.next_player;
        }
        (turn, board, player)
    }

    #[test]
    fn test_alternates_players() {
        let mut turn = TurnController::new();
        let board = Board::new(3).unwrap();
        let outcome = turn.attempt_move(&board, 1, 1, Marker::X).unwrap();
        assert_eq!(outcome.next_player, Marker::O);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(outcome.applied, Move { x: 1, y: 1, marker: Marker::X });
        assert_eq!(outcome.board.get(1, 1), Ok(Some(Marker::X)));
    }

    #[test]
    fn test_column_win_scenario() {
        let (turn, board, _) = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(turn.status(), GameStatus::Won(Marker::X));
        assert_eq!(find_winner(&board), Some(Marker::X));
    }

    #[test]
    fn test_draw_scenario() {
        // X O X
        // X O O
        // O X X
        let (turn, board, _) = play(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(turn.status(), GameStatus::Drawn);
    }

    #[test]
    fn test_failures_leave_state_untouched() {
        let (mut turn, board, player) = play(&[(1, 1)]);
        let before = (turn, board.clone());

        assert_eq!(
            turn.attempt_move(&board, 1, 1, player),
            Err(GameError::CellOccupied { x: 1, y: 1 })
        );
        assert_eq!(
            turn.attempt_move(&board, 0, 5, player),
            Err(GameError::OutOfBounds { x: 0, y: 5, size: 3 })
        );
        assert_eq!((turn, board), before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let (mut turn, board, player) = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = (turn, board.clone());
        assert_eq!(
            turn.attempt_move(&board, 2, 0, player),
            Err(GameError::GameOver)
        );
        // game over takes precedence over any other problem with the move
        assert_eq!(
            turn.attempt_move(&board, 9, 9, player),
            Err(GameError::GameOver)
        );
        assert_eq!((turn, board), before);
    }

    #[test]
    fn test_from_board() {
        let board = Board::new(1).unwrap();
        assert_eq!(TurnController::from_board(&board).status(), GameStatus::InProgress);
        let board = board.set(0, 0, Marker::O).unwrap();
        assert_eq!(
            TurnController::from_board(&board).status(),
            GameStatus::Won(Marker::O)
        );
    }
}
