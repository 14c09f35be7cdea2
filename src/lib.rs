//! Tic-tac-toe on an N×N board with a move history that can be rewound
//! and branched from.
//!
//! [`GameController`] is the entry point: renderers read its
//! [`GameSession`] and feed back [`Intent`]s.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod message;
pub mod term;
pub mod turn;
pub mod win;

pub use board::{Board, Marker};
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use game::{GameController, GameSession};
pub use history::MoveHistory;
pub use message::{Intent, Reply};
pub use turn::{GameStatus, Move, TurnController, TurnOutcome};
pub use win::{find_winner, winning_line, Line};
