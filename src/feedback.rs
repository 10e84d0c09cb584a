//! Feedback sinks - the sound/haptic side of the game.
//!
//! Sinks consume match/mismatch/win events after the state machine has
//! already moved on. They are fire-and-forget: a sink that fails swallows
//! the failure itself and must never surface it to the core.

use std::io::{self, Write};

use crate::types::FeedbackEvent;

pub trait FeedbackSink {
    fn emit(&mut self, event: FeedbackEvent);
}

/// Terminal bell feedback: one BEL per event, two for a win.
///
/// About as much audio as a raw terminal offers. Write errors are dropped
/// on the floor; losing a beep never matters.
pub struct TerminalFeedback {
    out: io::Stdout,
}

impl TerminalFeedback {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSink for TerminalFeedback {
    fn emit(&mut self, event: FeedbackEvent) {
        let bells: &[u8] = match event {
            FeedbackEvent::Match | FeedbackEvent::Mismatch => b"\x07",
            FeedbackEvent::Win => b"\x07\x07",
        };
        let _ = self.out.write_all(bells);
        let _ = self.out.flush();
    }
}

/// Discards every event. Useful for tests and headless runs.
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn emit(&mut self, _event: FeedbackEvent) {}
}
