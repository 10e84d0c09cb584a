//! Core module - pure game logic with no external dependencies
//!
//! Deck construction, the flip state machine and the rendering snapshot.
//! It has zero dependencies on UI, terminal I/O, or timing sources.

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use deck::{build_deck, parse_difficulty, select_count, Card, ConfigError};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::{CardSnapshot, GameSnapshot};
