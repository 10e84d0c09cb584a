//! Read-only snapshot of the game for the presentation layer.
//!
//! Everything a renderer needs to draw faces, the HUD and the win screen,
//! with no view into internal timer state.

use crate::types::{Difficulty, ImageRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSnapshot {
    pub image: ImageRef,
    pub matched: bool,
    pub face_up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub difficulty: Difficulty,
    pub started: bool,
    pub won: bool,
    pub pairs_found: usize,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.difficulty = Difficulty::default();
        self.started = false;
        self.won = false;
        self.pairs_found = 0;
        self.episode_id = 0;
    }

    pub fn pairs_total(&self) -> usize {
        self.cards.len() / 2
    }

    /// Whether the board should accept flip input
    pub fn playable(&self) -> bool {
        self.started && !self.won
    }
}
