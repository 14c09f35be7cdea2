use tracing::debug;

use crate::{board::Board, error::GameError, turn::Move};

/// Board snapshots for every move played, with a cursor for time travel.
///
/// Entry 0 is always the empty board and entry `i + 1` is entry `i` with
/// `moves()[i]` applied. Appending while the cursor sits on an older entry
/// throws away everything after it.
#[derive(Debug, PartialEq, Clone)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
    moves: Vec<Move>,
    cursor: usize,
}

impl MoveHistory {
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        Ok(Self {
            snapshots: vec![Board::new(board_size)?],
            moves: Vec::new(),
            cursor: 0,
        })
    }

    pub fn append(&mut self, mv: Move) -> Result<(), GameError> {
        let current = self.current_board();
        if current.get(mv.x, mv.y)?.is_some() {
            return Err(GameError::CellOccupied { x: mv.x, y: mv.y });
        }
        let next = current.set(mv.x, mv.y, mv.marker)?;

        if self.cursor + 1 < self.snapshots.len() {
            debug!(
                cursor = self.cursor,
                discarded = self.snapshots.len() - self.cursor - 1,
                "branching history"
            );
        }
        self.snapshots.truncate(self.cursor + 1);
        self.moves.truncate(self.cursor);

        self.snapshots.push(next);
        self.moves.push(mv);
        self.cursor += 1;
        Ok(())
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.snapshots.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true, entry 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every entry together with the move that led to it.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Option<&Move>, &Board)> + '_ {
        self.snapshots.iter().enumerate().map(move |(index, board)| {
            let mv = index.checked_sub(1).map(|m| &self.moves[m]);
            (index, mv, board)
        })
    }

    pub fn describe(index: usize) -> String {
        if index == 0 {
            "game start".to_string()
        } else {
            format!("move #{index}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Marker;

    fn mv(x: usize, y: usize, marker: Marker) -> Move {
        Move { x, y, marker }
    }

    #[test]
    fn test_starts_with_empty_board() {
        let history = MoveHistory::new(3).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current_board(), &Board::new(3).unwrap());
        assert!(history.moves().is_empty());
    }

    #[test]
    fn test_append_matches_direct_application() {
        let mut history = MoveHistory::new(3).unwrap();
        history.append(mv(0, 0, Marker::X)).unwrap();
        let prior = history.current_board().clone();

        let m = mv(2, 1, Marker::O);
        history.append(m).unwrap();
        history.select_index(history.len() - 1).unwrap();

        assert_eq!(history.current_board(), &prior.set(2, 1, Marker::O).unwrap());
        assert_eq!(history.moves(), &[mv(0, 0, Marker::X), m]);
    }

    #[test]
    fn test_select_keeps_entries() {
        let mut history = MoveHistory::new(3).unwrap();
        history.append(mv(0, 0, Marker::X)).unwrap();
        history.append(mv(1, 0, Marker::O)).unwrap();

        history.select_index(0).unwrap();
        assert_eq!(history.current_board().mark_count(), 0);
        assert_eq!(history.len(), 3);
        assert!(!history.is_at_latest());

        history.select_index(2).unwrap();
        assert_eq!(history.current_board().mark_count(), 2);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut history = MoveHistory::new(3).unwrap();
        history.append(mv(0, 0, Marker::X)).unwrap();
        assert_eq!(
            history.select_index(2),
            Err(GameError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_append_after_rewind_truncates() {
        let mut history = MoveHistory::new(3).unwrap();
        for (x, marker) in [(0, Marker::X), (1, Marker::O), (2, Marker::X)] {
            history.append(mv(x, 0, marker)).unwrap();
        }
        assert_eq!(history.len(), 4);

        history.select_index(1).unwrap();
        history.append(mv(1, 1, Marker::O)).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert!(history.board_at(3).is_none());
        assert_eq!(history.moves(), &[mv(0, 0, Marker::X), mv(1, 1, Marker::O)]);
        assert_eq!(history.current_board().get(1, 0), Ok(None));
    }

    #[test]
    fn test_rejects_illegal_moves() {
        let mut history = MoveHistory::new(2).unwrap();
        history.append(mv(0, 0, Marker::X)).unwrap();
        let before = history.clone();

        assert_eq!(
            history.append(mv(0, 0, Marker::O)),
            Err(GameError::CellOccupied { x: 0, y: 0 })
        );
        assert!(matches!(
            history.append(mv(2, 0, Marker::O)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(history, before);
    }

    #[test]
    fn test_entries_and_labels() {
        let mut history = MoveHistory::new(3).unwrap();
        history.append(mv(1, 1, Marker::X)).unwrap();

        let entries: Vec<_> = history.entries().map(|(i, m, _)| (i, m.copied())).collect();
        assert_eq!(entries, vec![(0, None), (1, Some(mv(1, 1, Marker::X)))]);
        assert_eq!(MoveHistory::describe(0), "game start");
        assert_eq!(MoveHistory::describe(3), "move #3");
    }
}
