//! Terminal pairs runner.
//!
//! Event loop: render the current snapshot, poll for input until the next
//! tick, advance the revert timer, then hand any feedback events to the
//! sink. An optional CLI argument (`easy`/`medium`/`hard`) deals a board
//! immediately instead of waiting for a key.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::{parse_difficulty, GameSnapshot, GameState};
use tui_pairs::feedback::{FeedbackSink, TerminalFeedback};
use tui_pairs::input::{handle_key_event, should_quit, BoardCursor};
use tui_pairs::term::{GameView, TerminalRenderer, Viewport, DEFAULT_GLYPHS};
use tui_pairs::types::{Difficulty, GameAction, ImageRef, TICK_MS};

fn main() -> Result<()> {
    let initial = match std::env::args().nth(1) {
        Some(arg) => Some(parse_difficulty(&arg)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, initial);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, initial: Option<Difficulty>) -> Result<()> {
    let images: Vec<ImageRef> = (0..DEFAULT_GLYPHS.len() as u32).map(ImageRef).collect();
    let mut game = GameState::new(images, clock_seed());
    if let Some(difficulty) = initial {
        game.start(difficulty)?;
    }

    let view = GameView::default();
    let mut cursor = BoardCursor::new();
    let mut sink = TerminalFeedback::new();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let cols = snapshot.pairs_total();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, cursor.index(cols), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut game, &mut cursor, action)?;
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for ev in game.take_events() {
            sink.emit(ev);
        }
    }
}

fn apply_action(game: &mut GameState, cursor: &mut BoardCursor, action: GameAction) -> Result<()> {
    match action {
        GameAction::Start(difficulty) => {
            game.start(difficulty)?;
            cursor.clamp(difficulty.card_count());
        }
        GameAction::Restart => {
            // Re-deal at the current difficulty; ignored before any game.
            if game.started() {
                game.start(game.difficulty())?;
            }
        }
        GameAction::Flip => {
            let cols = game.deck().len() / 2;
            if cols > 0 {
                game.flip(cursor.index(cols));
            }
        }
        movement => {
            let cols = game.deck().len() / 2;
            cursor.apply(movement, cols);
        }
    }
    Ok(())
}
