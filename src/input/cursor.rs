//! Board cursor: which card the keyboard is pointing at.
//!
//! The deck renders as `pairs` columns by two rows, card id = row * cols +
//! col. The cursor clamps at the edges rather than wrapping.

use crate::types::GameAction;

const ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    col: usize,
    row: usize,
}

impl BoardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Card id under the cursor for a board with `cols` columns.
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Apply a movement action against a board with `cols` columns.
    /// Non-movement actions are ignored.
    pub fn apply(&mut self, action: GameAction, cols: usize) {
        if cols == 0 {
            return;
        }
        match action {
            GameAction::MoveLeft => self.col = self.col.saturating_sub(1),
            GameAction::MoveRight => self.col = (self.col + 1).min(cols - 1),
            GameAction::MoveUp => self.row = self.row.saturating_sub(1),
            GameAction::MoveDown => self.row = (self.row + 1).min(ROWS - 1),
            _ => {}
        }
    }

    /// Pull the cursor back onto a (possibly smaller) new board.
    pub fn clamp(&mut self, cols: usize) {
        if cols == 0 {
            *self = Self::default();
        } else {
            self.col = self.col.min(cols - 1);
            self.row = self.row.min(ROWS - 1);
        }
    }
}
