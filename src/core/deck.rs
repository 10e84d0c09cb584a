//! Deck module - difficulty selection and paired-deck construction
//!
//! The deck is the only place randomness enters the game: the chosen image
//! prefix is doubled and shuffled once at start. Everything downstream is
//! deterministic.

use thiserror::Error;

use crate::core::rng::SimpleRng;
use crate::types::{Difficulty, ImageRef};

/// A single card. Its id is its index in the deck (assigned after the
/// shuffle), so ids are stable for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub image: ImageRef,
    pub matched: bool,
}

/// Errors that can keep a game from starting. These are the only hard
/// errors in the engine; everything else is absorbed as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unrecognized difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("difficulty {difficulty} needs {needed} images, only {available} available")]
    NotEnoughImages {
        difficulty: Difficulty,
        needed: usize,
        available: usize,
    },
    #[error("invalid card count {count} for {available} images")]
    InvalidCount { count: usize, available: usize },
}

/// Parse a difficulty name, turning failure into a configuration error.
pub fn parse_difficulty(s: &str) -> Result<Difficulty, ConfigError> {
    Difficulty::from_str(s).ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
}

/// Map a difficulty to its card count, validating that enough distinct
/// images are available to build the deck. Runs before any deck is touched.
pub fn select_count(difficulty: Difficulty, available: usize) -> Result<usize, ConfigError> {
    let needed = difficulty.card_count();
    if available < needed {
        return Err(ConfigError::NotEnoughImages {
            difficulty,
            needed,
            available,
        });
    }
    Ok(needed)
}

/// Build a shuffled, paired deck from the first `count` images.
///
/// The prefix (not a random subset) of `images` is doubled, Fisher-Yates
/// shuffled with the supplied RNG, and each resulting position becomes a
/// card id. Every chosen image appears exactly twice.
pub fn build_deck(
    images: &[ImageRef],
    count: usize,
    rng: &mut SimpleRng,
) -> Result<Vec<Card>, ConfigError> {
    if count < 1 || count > images.len() {
        return Err(ConfigError::InvalidCount {
            count,
            available: images.len(),
        });
    }

    let chosen = &images[..count];
    let mut doubled: Vec<ImageRef> = Vec::with_capacity(count * 2);
    doubled.extend_from_slice(chosen);
    doubled.extend_from_slice(chosen);

    rng.shuffle(&mut doubled);

    Ok(doubled
        .into_iter()
        .map(|image| Card {
            image,
            matched: false,
        })
        .collect())
}
