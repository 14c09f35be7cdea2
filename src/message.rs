use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::GameError, turn::GameStatus};

/// What a renderer can ask of a game.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Intent {
    PlayMove { x: usize, y: usize },
    ViewHistory(usize),
}

/// What the game answers to an accepted [`Intent`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Reply {
    Played(GameStatus),
    Viewing(usize),
}

// accepted forms:
//   "x y" / "x,y"         play a move
//   "goto i" / "g i"      jump to history entry i
impl FromStr for Intent {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidIntent(s.trim().to_string());
        let words: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            ["goto" | "g" | "GOTO" | "G", index] => index
                .parse::<usize>()
                .map(Intent::ViewHistory)
                .map_err(|_| invalid()),
            [x, y] => match (x.parse::<usize>(), y.parse::<usize>()) {
                (Ok(x), Ok(y)) => Ok(Intent::PlayMove { x, y }),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}
