//! JSON views of a game in progress.
//!
//! A snapshot is what a remote client would be shown at the start of its
//! turn: its own color and current target, every player's position and
//! remaining target count, the grid, and the free tile. Snapshots are
//! write-only; there is no way to load a game back from one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::board::{Cell, Color, Occupant, Tile, BOARD_SIZE};
use crate::game::{Game, Player};

/// Public view of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub pos: Cell,
    pub remaining: usize,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        PlayerView {
            pos: p.position,
            remaining: p.remaining(),
        }
    }
}

/// The state handed to the player whose turn it is.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot<'a> {
    pub color: Color,
    pub quest: Option<Occupant>,
    pub players: BTreeMap<&'static str, PlayerView>,
    pub board: &'a [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub free: &'a Tile,
}

/// Captures the game from the current player's point of view.
pub fn snapshot(game: &Game) -> GameSnapshot<'_> {
    let me = game.current_player();
    GameSnapshot {
        color: me.color,
        quest: me.current_target(),
        players: game
            .players()
            .iter()
            .map(|p| (p.color.name(), PlayerView::from(p)))
            .collect(),
        board: game.maze().board().rows(),
        free: game.maze().free_tile(),
    }
}

/// Serializes the current player's snapshot as a JSON string.
pub fn to_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string(&snapshot(game))
}
