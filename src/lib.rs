//! Labyrinth maze engine library.
//!
//! Exposes the board model with its shift and connectivity rules, the turn
//! loop, move-choosing clients, JSON snapshots, text rendering, and the
//! self-play runner used by the binary entry point.

pub mod board;
pub mod client;
pub mod game;
pub mod render;
pub mod selfplay;
pub mod snapshot;
