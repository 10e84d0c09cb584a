//! Key → action mapping for terminal environments.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Difficulty, GameAction};

/// Map a key press to a game action, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Flip),
        KeyCode::Char('1') => Some(GameAction::Start(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::Start(Difficulty::Medium)),
        KeyCode::Char('3') => Some(GameAction::Start(Difficulty::Hard)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Quit on q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
