//! Input module - key mapping and board cursor for the terminal UI

pub mod cursor;
pub mod map;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, should_quit};
