//! Board representation.
//!
//! Contains the direction and tile model, the 7x7 grid with its free tile,
//! the shift rules, and the connectivity graph derived from the grid.

pub mod cell;
pub mod direction;
pub mod graph;
pub mod layout;
pub mod maze;
pub mod shift;
pub mod state;
pub mod tile;

pub use cell::{Cell, CellSet, BOARD_SIZE, CELL_COUNT};
pub use direction::{Direction, CARDINALS};
pub use graph::{linked_neighbor, linked_neighbors, Graph};
pub use layout::{
    fixed_tile, movable_pool, start_cell, FIXED_COUNT, FIXED_TILES, MOVABLE_COUNT,
};
pub use maze::Maze;
pub use shift::{Shift, ShiftError, SHIFTABLE_LINES};
pub use state::{Board, BoardError};
pub use tile::{Color, Occupant, Quest, Tile, ALL_COLORS, ALL_QUESTS, QUEST_COUNT};
