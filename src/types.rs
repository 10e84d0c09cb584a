//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed event-loop tick (milliseconds)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays face-up before reverting (milliseconds)
pub const MISMATCH_REVERT_MS: u32 = 1000;

/// Largest card count any difficulty selects; the image source must supply
/// at least this many distinct images.
pub const MAX_CARD_COUNT: usize = 5;

/// Opaque handle to an image supplied by the presentation layer.
///
/// The engine only ever compares these for equality; what they point at
/// (a glyph, a texture, a file) is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub u32);

/// Difficulty presets controlling deck size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of distinct images used for this difficulty (deck is twice this)
    pub fn card_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract feedback signals consumed by sound/haptic collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    Match,
    Mismatch,
    Win,
}

impl FeedbackEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackEvent::Match => "match",
            FeedbackEvent::Mismatch => "mismatch",
            FeedbackEvent::Win => "win",
        }
    }
}

/// Machine phase, derived from game state (never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game started yet
    Idle,
    /// Deck built, nothing pending
    Ready,
    /// One card face-up, waiting for its partner
    OnePicked,
    /// Two cards face-up, mismatch revert pending
    Resolving,
    /// All pairs found (terminal until restart)
    Won,
}

/// Player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Flip,
    Start(Difficulty),
    Restart,
}
