use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    board::{Board, Marker},
    config::GameConfig,
    error::GameError,
    history::MoveHistory,
    message::{Intent, Reply},
    turn::{GameStatus, TurnController},
};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    pub next_player: Marker,
    pub status: GameStatus,
    pub cursor: usize,
    pub history_len: usize,
}

impl GameSession {
    pub fn winner(&self) -> Option<Marker> {
        self.status.winner()
    }
}

/// One game session: the board history, whose turn it is and how the game
/// stands at the currently viewed entry.
#[derive(Debug, Clone)]
pub struct GameController {
    history: MoveHistory,
    turn: TurnController,
    first_player: Marker,
    next_player: Marker,
}

impl GameController {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            history: MoveHistory::new(config.board_size)?,
            turn: TurnController::new(),
            first_player: config.first_player,
            next_player: config.first_player,
        })
    }

    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn play_move(&mut self, x: usize, y: usize) -> Result<GameStatus, GameError> {
        let mut turn = self.turn;
        let outcome = turn.attempt_move(self.history.current_board(), x, y, self.next_player)?;
        self.history.append(outcome.applied)?;

        self.turn = turn;
        self.next_player = outcome.next_player;
        Ok(outcome.status)
    }

    /// Moves the history cursor. Whose turn it is follows from the parity
    /// of the selected entry rather than from the moves made after it.
    #[instrument(skip(self))]
    pub fn view_history(&mut self, index: usize) -> Result<(), GameError> {
        self.history.select_index(index)?;
        self.turn = TurnController::from_board(self.history.current_board());
        self.next_player = self.player_for(index);
        debug!(status = %self.turn.status(), next = %self.next_player, "rewound");
        Ok(())
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Reply, GameError> {
        match intent {
            Intent::PlayMove { x, y } => self.play_move(x, y).map(Reply::Played),
            Intent::ViewHistory(index) => self.view_history(index).map(|()| Reply::Viewing(index)),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.turn.status()
    }

    pub fn next_player(&self) -> Marker {
        self.next_player
    }

    pub fn first_player(&self) -> Marker {
        self.first_player
    }

    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn session(&self) -> GameSession {
        GameSession {
            board: self.board().clone(),
            next_player: self.next_player,
            status: self.status(),
            cursor: self.history.cursor(),
            history_len: self.history.len(),
        }
    }

    fn player_for(&self, index: usize) -> Marker {
        if index % 2 == 0 {
            self.first_player
        } else {
            !self.first_player
        }
    }
}
