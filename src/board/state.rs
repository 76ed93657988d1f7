//! Board state: the 7x7 tile grid plus the free tile.
//!
//! Fixed tiles stay on their (even, even) cells for the whole game. Movable
//! tiles only change place through shifts, which swap exactly one of them
//! with the free tile.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cell::{Cell, BOARD_SIZE};
use super::direction::Direction;
use super::layout::{fixed_tile, movable_pool, MOVABLE_COUNT};
use super::tile::{Occupant, Tile};

/// Errors that can occur while constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("movable pool must hold {expected} tiles, got {got}")]
    PoolSize { expected: usize, got: usize },
}

/// The tile grid and the spare tile held outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) free: Tile,
}

impl Board {
    /// Builds a board from the standard fixed layout and a movable pool.
    ///
    /// The pool must already be shuffled and rotated. Its first 33 tiles
    /// fill the movable cells in row-major order; the last becomes the free
    /// tile.
    pub fn new(pool: Vec<Tile>) -> Result<Board, BoardError> {
        if pool.len() != MOVABLE_COUNT {
            return Err(BoardError::PoolSize {
                expected: MOVABLE_COUNT,
                got: pool.len(),
            });
        }

        Ok(Board::assemble(pool))
    }

    /// Builds a board from the standard tile set, shuffled and with every
    /// movable tile rotated by a random number of quarter turns.
    pub fn random(rng: &mut impl Rng) -> Board {
        let mut pool = movable_pool();
        pool.shuffle(rng);
        for tile in pool.iter_mut() {
            tile.rotate(rng.gen_range(0..4));
        }
        Board::assemble(pool)
    }

    /// Lays out a pool whose length has already been checked.
    fn assemble(pool: Vec<Tile>) -> Board {
        let mut movable = pool.into_iter();
        let mut cells = [[Tile::blank(Direction::NONE); BOARD_SIZE]; BOARD_SIZE];
        for cell in Cell::all() {
            cells[cell.row()][cell.col()] = match fixed_tile(cell) {
                Some(t) => t,
                None => movable.next().unwrap_or(Tile::blank(Direction::NONE)),
            };
        }
        let free = movable.next().unwrap_or(Tile::blank(Direction::NONE));
        Board { cells, free }
    }

    /// Builds a board from an explicit grid, bypassing the standard layout.
    ///
    /// Nothing checks that the grid follows the fixed layout; intended for
    /// puzzles and tests that need hand-placed tiles.
    pub fn from_grid(cells: [[Tile; BOARD_SIZE]; BOARD_SIZE], free: Tile) -> Board {
        Board { cells, free }
    }

    /// Returns the tile at `cell`.
    pub fn tile_at(&self, cell: Cell) -> &Tile {
        &self.cells[cell.row()][cell.col()]
    }

    /// Returns the spare tile held outside the grid.
    pub fn free_tile(&self) -> &Tile {
        &self.free
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Tile; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns every movable tile: those on movable cells, then the free one.
    pub fn movable_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = Cell::all()
            .filter(|c| !c.is_fixed())
            .map(|c| *self.tile_at(c))
            .collect();
        tiles.push(self.free);
        tiles
    }

    /// Finds the grid cell whose tile carries `occupant`.
    ///
    /// Returns None if it is on the free tile.
    pub fn locate(&self, occupant: Occupant) -> Option<Cell> {
        Cell::all().find(|c| self.tile_at(*c).occupant == Some(occupant))
    }

    /// Returns true if every fixed cell still holds its layout tile.
    pub fn fixed_tiles_intact(&self) -> bool {
        Cell::all()
            .filter(|c| c.is_fixed())
            .all(|c| fixed_tile(c).as_ref() == Some(self.tile_at(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tile::{Color, Quest};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn new_places_pool_row_major() {
        let pool = movable_pool();
        let board = Board::new(pool.clone()).unwrap();
        assert_eq!(*board.tile_at(Cell::new(0, 1).unwrap()), pool[0]);
        assert_eq!(*board.tile_at(Cell::new(1, 0).unwrap()), pool[3]);
        assert_eq!(*board.free_tile(), pool[MOVABLE_COUNT - 1]);
        assert!(board.fixed_tiles_intact());
    }

    #[test]
    fn new_rejects_wrong_pool_size() {
        let mut pool = movable_pool();
        pool.pop();
        assert_eq!(
            Board::new(pool),
            Err(BoardError::PoolSize {
                expected: MOVABLE_COUNT,
                got: MOVABLE_COUNT - 1
            })
        );
        let mut pool = movable_pool();
        pool.push(Tile::blank(Direction::EW));
        assert!(Board::new(pool).is_err());
    }

    #[test]
    fn random_board_keeps_the_tile_set() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = Board::random(&mut rng);
        assert!(board.fixed_tiles_intact());

        // Rotation changes paths but never occupants, and shapes keep their
        // number of openings.
        let mut got: Vec<(u32, Option<Occupant>)> = board
            .movable_tiles()
            .iter()
            .map(|t| (t.paths.len(), t.occupant))
            .collect();
        let mut want: Vec<(u32, Option<Occupant>)> = movable_pool()
            .iter()
            .map(|t| (t.paths.len(), t.occupant))
            .collect();
        let key = |x: &(u32, Option<Occupant>)| (x.0, x.1.map(|o| o.symbol()));
        got.sort_by_key(key);
        want.sort_by_key(key);
        assert_eq!(got, want);
    }

    #[test]
    fn locate_finds_occupants() {
        let pool = movable_pool();
        let board = Board::new(pool.clone()).unwrap();
        assert_eq!(
            board.locate(Occupant::Start(Color::Blue)),
            Cell::new(6, 6)
        );
        assert_eq!(board.locate(Occupant::Quest(Quest::Bat)), Cell::new(0, 1));
        // The last pool tile is a blank corner on the free slot.
        assert_eq!(pool[MOVABLE_COUNT - 1].occupant, None);
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = Board::random(&mut SmallRng::seed_from_u64(99));
        let b = Board::random(&mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
