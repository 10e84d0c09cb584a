//! Terminal pairs: a memory-matching card game.
//!
//! All rules live in [`core`], which is pure and deterministic given a
//! seed. The terminal front end (`term`, `input`), the feedback sinks
//! (`feedback`) and the binary are thin shells around it.

pub mod core;
pub mod feedback;
pub mod input;
pub mod term;
pub mod types;
