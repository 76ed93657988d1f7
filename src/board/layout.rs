//! The standard tile set.
//!
//! Sixteen fixed tiles sit on the (even, even) cells and never move. The
//! remaining 34 movable tiles fill the other 33 cells, with one left over
//! as the free tile. All data is compile-time `const`.

use super::cell::Cell;
use super::direction::Direction;
use super::tile::{Color, Quest, Tile};

/// Number of fixed tiles.
pub const FIXED_COUNT: usize = 16;

/// Number of movable tiles, including the free tile.
pub const MOVABLE_COUNT: usize = 34;

/// Fixed tiles as `(row, col, tile)`, in row-major order.
pub const FIXED_TILES: [(usize, usize, Tile); FIXED_COUNT] = [
    (0, 0, Tile::start(Direction::SE, Color::Red)),
    (0, 2, Tile::quest(Direction::SEW, Quest::Book)),
    (0, 4, Tile::quest(Direction::SEW, Quest::Pouch)),
    (0, 6, Tile::start(Direction::SW, Color::Yellow)),
    (2, 0, Tile::quest(Direction::NSE, Quest::Map)),
    (2, 2, Tile::quest(Direction::NSE, Quest::Crown)),
    (2, 4, Tile::quest(Direction::SEW, Quest::Keys)),
    (2, 6, Tile::quest(Direction::NSW, Quest::Skull)),
    (4, 0, Tile::quest(Direction::NSE, Quest::Ring)),
    (4, 2, Tile::quest(Direction::NEW, Quest::Chest)),
    (4, 4, Tile::quest(Direction::NSW, Quest::Emerald)),
    (4, 6, Tile::quest(Direction::NSW, Quest::Sword)),
    (6, 0, Tile::start(Direction::NE, Color::Green)),
    (6, 2, Tile::quest(Direction::NEW, Quest::Candelabra)),
    (6, 4, Tile::quest(Direction::NEW, Quest::Helmet)),
    (6, 6, Tile::start(Direction::NW, Color::Blue)),
];

/// Movable tiles bearing a quest item.
const MOVABLE_QUESTS: [Tile; 12] = [
    Tile::quest(Direction::NEW, Quest::Bat),
    Tile::quest(Direction::NEW, Quest::Dragon),
    Tile::quest(Direction::NEW, Quest::Genie),
    Tile::quest(Direction::NEW, Quest::Ghost),
    Tile::quest(Direction::NEW, Quest::Goblin),
    Tile::quest(Direction::NEW, Quest::Witch),
    Tile::quest(Direction::NE, Quest::Lizard),
    Tile::quest(Direction::NE, Quest::Moth),
    Tile::quest(Direction::NE, Quest::Mouse),
    Tile::quest(Direction::NE, Quest::Spider),
    Tile::quest(Direction::NE, Quest::Owl),
    Tile::quest(Direction::NE, Quest::Scarab),
];

/// Blank straight tiles in the movable set.
const BLANK_STRAIGHTS: usize = 13;

/// Blank corner tiles in the movable set.
const BLANK_CORNERS: usize = 9;

/// Returns the unshuffled, unrotated movable tile set.
pub fn movable_pool() -> Vec<Tile> {
    let mut pool = Vec::with_capacity(MOVABLE_COUNT);
    pool.extend_from_slice(&MOVABLE_QUESTS);
    pool.extend(std::iter::repeat(Tile::blank(Direction::EW)).take(BLANK_STRAIGHTS));
    pool.extend(std::iter::repeat(Tile::blank(Direction::NE)).take(BLANK_CORNERS));
    pool
}

/// Returns the fixed tile that belongs at `cell`, if the cell is fixed.
pub fn fixed_tile(cell: Cell) -> Option<Tile> {
    FIXED_TILES
        .iter()
        .find(|(r, c, _)| *r == cell.row() && *c == cell.col())
        .map(|(_, _, t)| *t)
}

/// The corner each color starts on (and must return to).
pub const fn start_cell(color: Color) -> Cell {
    let (row, col) = match color {
        Color::Red => (0, 0),
        Color::Yellow => (0, 6),
        Color::Green => (6, 0),
        Color::Blue => (6, 6),
    };
    match Cell::new(row, col) {
        Some(cell) => cell,
        None => unreachable!(),
    }
}
