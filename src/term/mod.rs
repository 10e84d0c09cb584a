//! Terminal module - framebuffer, renderer and the card-grid view

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport, DEFAULT_GLYPHS};
pub use renderer::TerminalRenderer;
