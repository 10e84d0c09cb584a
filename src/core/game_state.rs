//! Game state module - the flip/match/mismatch state machine
//!
//! Owns the deck, the (at most two) face-up cards, the mismatch-revert
//! timer, and win detection. The only asynchrony is that timer, driven by
//! `tick(elapsed_ms)` from the event loop; everything else resolves
//! synchronously inside `flip`.

use arrayvec::ArrayVec;

use crate::core::deck::{build_deck, select_count, Card, ConfigError};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{CardSnapshot, GameSnapshot};
use crate::types::{Difficulty, FeedbackEvent, ImageRef, Phase, MISMATCH_REVERT_MS};

/// Pending mismatch revert. Tagged with the episode it was armed in so a
/// timer scheduled against an old deck can never clear flips in a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RevertTimer {
    remaining_ms: u32,
    episode: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Image source, supplied once at construction and never mutated.
    images: Vec<ImageRef>,
    deck: Vec<Card>,
    /// Cards currently face-up pending resolution, in flip order.
    flipped: ArrayVec<usize, 2>,
    matched_pairs: usize,
    difficulty: Difficulty,
    started: bool,
    won: bool,
    revert_timer: Option<RevertTimer>,
    /// Monotonic episode id (increments on every start/reset).
    episode_id: u32,
    rng: SimpleRng,
    /// Feedback events queued since the last drain (observer pattern;
    /// sinks are fire-and-forget and never touch this state).
    events: Vec<FeedbackEvent>,
}

impl GameState {
    /// Create an idle game over the given image source and RNG seed
    pub fn new(images: Vec<ImageRef>, seed: u32) -> Self {
        Self {
            images,
            deck: Vec::new(),
            flipped: ArrayVec::new(),
            matched_pairs: 0,
            difficulty: Difficulty::default(),
            started: false,
            won: false,
            revert_timer: None,
            episode_id: 0,
            rng: SimpleRng::new(seed),
            events: Vec::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// True while a mismatch revert is pending; new flips are blocked.
    pub fn resolving(&self) -> bool {
        self.revert_timer.is_some()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Derived machine phase
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.won {
            Phase::Won
        } else if self.resolving() {
            Phase::Resolving
        } else if self.flipped.len() == 1 {
            Phase::OnePicked
        } else {
            Phase::Ready
        }
    }

    /// Whether a card currently renders face-up
    pub fn is_face_up(&self, id: usize) -> bool {
        self.deck
            .get(id)
            .map(|card| card.matched || self.flipped.contains(&id))
            .unwrap_or(false)
    }

    /// Start (or restart) a game at the given difficulty.
    ///
    /// Validates the difficulty against the image source and builds a fresh
    /// shuffled deck. On error nothing changes and the previous game, if
    /// any, keeps playing. Any pending revert timer is cancelled.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<(), ConfigError> {
        let count = select_count(difficulty, self.images.len())?;
        let deck = build_deck(&self.images, count, &mut self.rng)?;

        self.deck = deck;
        self.difficulty = difficulty;
        self.flipped.clear();
        self.matched_pairs = 0;
        self.started = true;
        self.won = false;
        self.revert_timer = None;
        self.events.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        Ok(())
    }

    /// Clear all progress on the current deck without rebuilding it.
    ///
    /// Cancels any pending timer, un-matches every card and drops queued
    /// events. Stays idle if no deck was ever built.
    pub fn reset(&mut self) {
        self.revert_timer = None;
        self.flipped.clear();
        self.matched_pairs = 0;
        self.won = false;
        self.events.clear();
        for card in &mut self.deck {
            card.matched = false;
        }
        self.started = !self.deck.is_empty();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Request a card flip. Returns whether the request was accepted.
    ///
    /// Deliberately permissive: flips before start, on matched or already
    /// face-up cards, out of range, or while a mismatch is resolving are
    /// silently ignored so rapid/duplicate UI events cannot corrupt state.
    pub fn flip(&mut self, id: usize) -> bool {
        if !self.started || self.won || self.resolving() {
            return false;
        }
        let Some(card) = self.deck.get(id) else {
            return false;
        };
        if card.matched || self.flipped.contains(&id) {
            return false;
        }

        self.flipped.push(id);
        if self.flipped.len() == 2 {
            self.resolve_pair();
        }
        true
    }

    /// Evaluate the two face-up cards. Matches resolve immediately with no
    /// timer; mismatches stay face-up until the revert timer fires.
    fn resolve_pair(&mut self) {
        let (a, b) = (self.flipped[0], self.flipped[1]);

        if self.deck[a].image == self.deck[b].image {
            self.deck[a].matched = true;
            self.deck[b].matched = true;
            self.matched_pairs += 1;
            self.flipped.clear();
            self.events.push(FeedbackEvent::Match);

            // Win check is a post-update size comparison, evaluated exactly
            // once per successful match.
            if self.matched_pairs * 2 == self.deck.len() {
                self.won = true;
                self.events.push(FeedbackEvent::Win);
            }
        } else {
            self.events.push(FeedbackEvent::Mismatch);
            self.revert_timer = Some(RevertTimer {
                remaining_ms: MISMATCH_REVERT_MS,
                episode: self.episode_id,
            });
        }
    }

    /// Advance the revert timer. Returns true when the pending mismatch
    /// flipped back this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(timer) = self.revert_timer else {
            return false;
        };

        // A timer armed for an older deck is dropped without side effects.
        if timer.episode != self.episode_id {
            self.revert_timer = None;
            return false;
        }

        let remaining_ms = timer.remaining_ms.saturating_sub(elapsed_ms);
        if remaining_ms == 0 {
            self.revert_timer = None;
            self.flipped.clear();
            true
        } else {
            self.revert_timer = Some(RevertTimer {
                remaining_ms,
                ..timer
            });
            false
        }
    }

    /// Drain the feedback events queued since the last call.
    ///
    /// The caller forwards them to a `FeedbackSink`; sink latency or
    /// failure can never flow back into the machine.
    pub fn take_events(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fill a snapshot buffer with the current rendering contract
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.deck.iter().enumerate().map(|(id, card)| CardSnapshot {
            image: card.image,
            matched: card.matched,
            face_up: card.matched || self.flipped.contains(&id),
        }));
        out.difficulty = self.difficulty;
        out.started = self.started;
        out.won = self.won;
        out.pairs_found = self.matched_pairs;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: u32) -> Vec<ImageRef> {
        (0..n).map(ImageRef).collect()
    }

    fn started_game(seed: u32) -> GameState {
        let mut state = GameState::new(images(5), seed);
        state.start(Difficulty::Easy).unwrap();
        state
    }

    /// Index of the partner card sharing `id`'s image.
    fn partner_of(state: &GameState, id: usize) -> usize {
        let image = state.deck()[id].image;
        state
            .deck()
            .iter()
            .enumerate()
            .find(|(i, c)| *i != id && c.image == image)
            .map(|(i, _)| i)
            .unwrap()
    }

    /// Index of a card with a different image than `id`.
    fn stranger_of(state: &GameState, id: usize) -> usize {
        let image = state.deck()[id].image;
        state
            .deck()
            .iter()
            .enumerate()
            .find(|(_, c)| c.image != image)
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn test_new_game_is_idle() {
        let state = GameState::new(images(5), 1);
        assert!(!state.started());
        assert!(!state.won());
        assert!(!state.resolving());
        assert!(state.deck().is_empty());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_builds_even_deck() {
        let state = started_game(12345);
        assert!(state.started());
        assert_eq!(state.deck().len(), 6);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_start_error_leaves_state_untouched() {
        let mut state = GameState::new(images(3), 1);
        state.start(Difficulty::Easy).unwrap();
        state.flip(0);

        let err = state.start(Difficulty::Hard).unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughImages { .. }));
        // Still the old game, mid-flip.
        assert_eq!(state.flipped(), &[0]);
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_flip_before_start_is_ignored() {
        let mut state = GameState::new(images(5), 1);
        assert!(!state.flip(0));
        assert!(state.flipped().is_empty());
    }

    #[test]
    fn test_first_flip_moves_to_one_picked() {
        let mut state = started_game(1);
        assert!(state.flip(0));
        assert_eq!(state.flipped(), &[0]);
        assert_eq!(state.phase(), Phase::OnePicked);
        assert!(state.is_face_up(0));
    }

    #[test]
    fn test_duplicate_and_out_of_range_flips_are_ignored() {
        let mut state = started_game(1);
        state.flip(0);
        assert!(!state.flip(0));
        assert!(!state.flip(999));
        assert_eq!(state.flipped(), &[0]);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_matching_pair_resolves_immediately() {
        let mut state = started_game(1);
        let partner = partner_of(&state, 0);

        state.flip(0);
        state.flip(partner);

        assert!(state.deck()[0].matched);
        assert!(state.deck()[partner].matched);
        assert!(state.flipped().is_empty());
        assert!(!state.resolving());
        assert_eq!(state.matched_pairs(), 1);
        assert_eq!(state.take_events(), vec![FeedbackEvent::Match]);
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_mismatch_blocks_flips_until_timer_fires() {
        let mut state = started_game(1);
        let stranger = stranger_of(&state, 0);

        state.flip(0);
        state.flip(stranger);

        assert_eq!(state.phase(), Phase::Resolving);
        assert_eq!(state.take_events(), vec![FeedbackEvent::Mismatch]);
        assert_eq!(state.flipped().len(), 2);

        // Third flip while resolving is absorbed.
        let other = (0..state.deck().len())
            .find(|&i| i != 0 && i != stranger)
            .unwrap();
        assert!(!state.flip(other));

        // One tick short of the delay: still face-up.
        assert!(!state.tick(MISMATCH_REVERT_MS - 1));
        assert_eq!(state.flipped().len(), 2);

        // Delay elapsed: cards revert, nothing matched.
        assert!(state.tick(1));
        assert!(state.flipped().is_empty());
        assert!(!state.deck()[0].matched);
        assert!(!state.deck()[stranger].matched);
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_win_after_all_pairs() {
        let mut state = started_game(1);
        let deck_len = state.deck().len();

        for id in 0..deck_len {
            if state.deck()[id].matched {
                continue;
            }
            let partner = partner_of(&state, id);
            state.flip(id);
            state.flip(partner);
        }

        assert!(state.won());
        assert_eq!(state.phase(), Phase::Won);
        assert_eq!(state.matched_pairs() * 2, deck_len);

        let events = state.take_events();
        assert_eq!(events.iter().filter(|e| **e == FeedbackEvent::Win).count(), 1);
        assert_eq!(*events.last().unwrap(), FeedbackEvent::Win);

        // Terminal until restart.
        assert!(!state.flip(0));
    }

    #[test]
    fn test_reset_clears_progress_but_keeps_deck() {
        let mut state = started_game(1);
        let deck_before: Vec<ImageRef> = state.deck().iter().map(|c| c.image).collect();
        let partner = partner_of(&state, 0);
        state.flip(0);
        state.flip(partner);

        state.reset();

        assert!(state.started());
        assert!(!state.won());
        assert!(!state.resolving());
        assert!(state.flipped().is_empty());
        assert_eq!(state.matched_pairs(), 0);
        assert!(state.deck().iter().all(|c| !c.matched));
        let deck_after: Vec<ImageRef> = state.deck().iter().map(|c| c.image).collect();
        assert_eq!(deck_before, deck_after);
    }

    #[test]
    fn test_reset_without_deck_stays_idle() {
        let mut state = GameState::new(images(5), 1);
        state.reset();
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_restart_cancels_pending_revert() {
        let mut state = started_game(1);
        let stranger = stranger_of(&state, 0);
        state.flip(0);
        state.flip(stranger);
        assert!(state.resolving());

        state.start(Difficulty::Easy).unwrap();
        assert!(!state.resolving());

        // Make progress in the new game, then run well past the old delay;
        // the stale timer must not clear the new game's flips.
        state.flip(0);
        assert!(!state.tick(MISMATCH_REVERT_MS * 2));
        assert_eq!(state.flipped(), &[0]);
    }

    #[test]
    fn test_stale_timer_from_old_episode_is_dropped() {
        let mut state = started_game(1);
        let stranger = stranger_of(&state, 0);
        state.flip(0);
        state.flip(stranger);

        // Simulate a timer surviving across an episode bump.
        let timer = state.revert_timer.unwrap();
        state.start(Difficulty::Easy).unwrap();
        state.flip(0);
        state.revert_timer = Some(timer);

        // The stale timer is discarded without clearing the new flip.
        assert!(!state.tick(MISMATCH_REVERT_MS * 2));
        assert!(!state.resolving());
        assert_eq!(state.flipped(), &[0]);
    }

    #[test]
    fn test_invariants_hold_through_random_play() {
        let mut state = started_game(987);
        let deck_len = state.deck().len();
        let mut rng = SimpleRng::new(555);

        for _ in 0..2000 {
            let id = rng.next_range(deck_len as u32 + 2) as usize;
            state.flip(id);
            state.tick(rng.next_range(400));

            assert!(state.flipped().len() <= 2);
            assert!(state
                .flipped()
                .iter()
                .all(|&i| !state.deck()[i].matched));
            assert_eq!(state.deck().len() % 2, 0);
            assert_eq!(state.won(), state.matched_pairs() * 2 == deck_len);
            if state.resolving() {
                assert_eq!(state.flipped().len(), 2);
            }
        }
    }

    #[test]
    fn test_snapshot_reflects_faces() {
        let mut state = started_game(1);
        state.flip(2);

        let snap = state.snapshot();
        assert_eq!(snap.cards.len(), state.deck().len());
        assert!(snap.cards[2].face_up);
        assert!(!snap.cards[2].matched);
        assert!(snap.started);
        assert!(!snap.won);
        assert_eq!(snap.pairs_total(), 3);
    }
}
