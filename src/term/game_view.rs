//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::snapshot::{CardSnapshot, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer};

/// Glyphs the default binary uses as its image source. `ImageRef(n)`
/// renders as the n-th entry.
pub const DEFAULT_GLYPHS: &[char] = &['♠', '♥', '♦', '♣', '★', '☀', '☂', '♫', '⚑', '☘'];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the card grid, HUD and overlays.
pub struct GameView {
    /// Card box width in terminal columns (including border).
    card_w: u16,
    /// Card box height in terminal rows (including border).
    card_h: u16,
    glyphs: &'static [char],
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 7,
            card_h: 5,
            glyphs: DEFAULT_GLYPHS,
        }
    }
}

const BOARD_ROWS: u16 = 2;

impl GameView {
    pub fn new(card_w: u16, card_h: u16, glyphs: &'static [char]) -> Self {
        Self {
            card_w,
            card_h,
            glyphs,
        }
    }

    fn glyph(&self, image: crate::types::ImageRef) -> char {
        self.glyphs.get(image.0 as usize).copied().unwrap_or('?')
    }

    /// Render the snapshot into a fresh framebuffer. `cursor_id` is the
    /// card id the keyboard cursor sits on; it is only drawn while the
    /// board accepts input.
    pub fn render(&self, snap: &GameSnapshot, cursor_id: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        self.draw_title(&mut fb, snap);

        if snap.started {
            self.draw_board(&mut fb, snap, cursor_id);
        } else {
            center_text(
                &mut fb,
                viewport.height / 2,
                "press 1, 2 or 3 to deal a board",
                CellStyle::default().bold(),
            );
        }

        if snap.won {
            let msg = " YOU WIN - press r to play again ";
            let style = CellStyle::new(
                Color::Rgb { r: 20, g: 20, b: 20 },
                Color::Rgb {
                    r: 220,
                    g: 180,
                    b: 40,
                },
            )
            .bold();
            center_text(&mut fb, viewport.height / 2, msg, style);
        }

        self.draw_help(&mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        center_text(fb, 1, "P A I R S", CellStyle::default().bold());
        if snap.started {
            let hud = format!(
                "difficulty: {}   pairs: {}/{}",
                snap.difficulty,
                snap.pairs_found,
                snap.pairs_total()
            );
            center_text(fb, 3, &hud, CellStyle::default());
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer) {
        let y = fb.height().saturating_sub(2);
        center_text(
            fb,
            y,
            "arrows/hjkl move · enter flip · 1/2/3 new game · r restart · q quit",
            CellStyle::default().dim(),
        );
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, cursor_id: usize) {
        let cols = snap.pairs_total() as u16;
        if cols == 0 {
            return;
        }

        let grid_w = cols * self.card_w + (cols - 1);
        let grid_h = BOARD_ROWS * self.card_h + (BOARD_ROWS - 1);
        let start_x = fb.width().saturating_sub(grid_w) / 2;
        let start_y = fb.height().saturating_sub(grid_h) / 2;

        for (id, card) in snap.cards.iter().enumerate() {
            let col = (id as u16) % cols;
            let row = (id as u16) / cols;
            let x = start_x + col * (self.card_w + 1);
            let y = start_y + row * (self.card_h + 1);
            let selected = snap.playable() && id == cursor_id;
            self.draw_card(fb, x, y, card, selected);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardSnapshot, selected: bool) {
        let border = if selected {
            CellStyle::new(
                Color::Rgb {
                    r: 230,
                    g: 200,
                    b: 60,
                },
                Color::Rgb { r: 0, g: 0, b: 0 },
            )
            .bold()
        } else {
            CellStyle::new(
                Color::Rgb {
                    r: 130,
                    g: 130,
                    b: 140,
                },
                Color::Rgb { r: 0, g: 0, b: 0 },
            )
        };
        draw_box(fb, x, y, self.card_w, self.card_h, border);

        let inner_w = self.card_w.saturating_sub(2);
        let inner_h = self.card_h.saturating_sub(2);

        if card.face_up {
            let style = if card.matched {
                CellStyle::new(
                    Color::Rgb {
                        r: 110,
                        g: 170,
                        b: 110,
                    },
                    Color::Rgb { r: 0, g: 0, b: 0 },
                )
                .dim()
            } else {
                CellStyle::new(
                    Color::Rgb {
                        r: 250,
                        g: 250,
                        b: 250,
                    },
                    Color::Rgb { r: 0, g: 0, b: 0 },
                )
                .bold()
            };
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', style);
            let cx = x + 1 + inner_w / 2;
            let cy = y + 1 + inner_h / 2;
            fb.set(cx, cy, style.into_cell(self.glyph(card.image)));
        } else {
            let back = CellStyle::new(
                Color::Rgb {
                    r: 60,
                    g: 90,
                    b: 170,
                },
                Color::Rgb { r: 0, g: 0, b: 0 },
            );
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '▒', back);
        }
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.into_cell('─'));
        fb.set(x + dx, y + h - 1, style.into_cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.into_cell('│'));
        fb.set(x + w - 1, y + dy, style.into_cell('│'));
    }
    fb.set(x, y, style.into_cell('╭'));
    fb.set(x + w - 1, y, style.into_cell('╮'));
    fb.set(x, y + h - 1, style.into_cell('╰'));
    fb.set(x + w - 1, y + h - 1, style.into_cell('╯'));
}

fn center_text(fb: &mut FrameBuffer, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    let x = fb.width().saturating_sub(len) / 2;
    fb.text(x, y, s, style);
}
