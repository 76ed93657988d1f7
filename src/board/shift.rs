//! Row and column shifts.
//!
//! A shift pushes the free tile into one end of an odd row or column. Every
//! tile on that line slides one step in the shift direction and the tile
//! pushed off the far end becomes the new free tile.
//!
//! The direction names the way the tiles travel: EAST slides a row toward
//! column 6, so the old column-6 tile is ejected and the free tile enters
//! at column 0.

use std::fmt;

use serde::Serialize;

use super::cell::BOARD_SIZE;
use super::direction::{Direction, CARDINALS};
use super::state::Board;

/// Errors that reject a shift before the board is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    #[error("board is fixed at row/col {0}")]
    FixedLine(usize),

    #[error("row/col {0} is off the board")]
    IndexOutOfRange(usize),

    #[error("shift direction must be a single compass point, got {0}")]
    NotCardinal(Direction),
}

/// A single push move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shift {
    /// Direction the tiles travel.
    pub direction: Direction,
    /// Row (for EAST/WEST) or column (for NORTH/SOUTH) to slide.
    pub index: usize,
    /// Quarter turns applied to the free tile before it is pushed in.
    pub rotation: u8,
}

/// Odd lines that can be shifted.
pub const SHIFTABLE_LINES: [usize; 3] = [1, 3, 5];

impl Shift {
    pub const fn new(direction: Direction, index: usize, rotation: u8) -> Self {
        Shift {
            direction,
            index,
            rotation,
        }
    }

    /// Checks the shift against the board geometry.
    pub fn validate(&self) -> Result<(), ShiftError> {
        if !self.direction.is_cardinal() {
            return Err(ShiftError::NotCardinal(self.direction));
        }
        if self.index >= BOARD_SIZE {
            return Err(ShiftError::IndexOutOfRange(self.index));
        }
        if self.index % 2 == 0 {
            return Err(ShiftError::FixedLine(self.index));
        }
        Ok(())
    }

    /// Returns true if this shift slides a row (EAST or WEST).
    pub fn is_row(&self) -> bool {
        self.direction.contains(Direction::EAST) || self.direction.contains(Direction::WEST)
    }

    /// Returns true if `self` pushes the same line back the way `other` came.
    pub fn reverses(&self, other: &Shift) -> bool {
        self.index == other.index && self.direction == other.direction.opposite()
    }

    /// The 12 shifts allowed on a standard board, with no rotation.
    pub fn all() -> impl Iterator<Item = Shift> {
        SHIFTABLE_LINES
            .into_iter()
            .flat_map(|index| CARDINALS.into_iter().map(move |d| Shift::new(d, index, 0)))
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = if self.is_row() { "row" } else { "col" };
        write!(
            f,
            "{} {} {} rot {}",
            axis, self.index, self.direction, self.rotation
        )
    }
}

impl Board {
    /// Applies `shift` to the grid and the free tile.
    ///
    /// The free tile is rotated first, then the line slides and the free
    /// tile swaps with the tile that wrapped around. Nothing is modified if
    /// the shift is rejected.
    pub fn shift(&mut self, shift: Shift) -> Result<(), ShiftError> {
        shift.validate()?;

        self.free.rotate(shift.rotation as i32);

        // Tiles travelling toward index 6 wrap the last tile to slot 0, which
        // is where the free tile enters. Travelling toward 0 is the mirror.
        let toward_end = shift.direction == Direction::EAST || shift.direction == Direction::SOUTH;
        let entry = if toward_end { 0 } else { BOARD_SIZE - 1 };
        let index = shift.index;

        if shift.is_row() {
            let row = &mut self.cells[index];
            if toward_end {
                row.rotate_right(1);
            } else {
                row.rotate_left(1);
            }
            std::mem::swap(&mut self.free, &mut row[entry]);
        } else {
            let mut col: [_; BOARD_SIZE] = std::array::from_fn(|r| self.cells[r][index]);
            if toward_end {
                col.rotate_right(1);
            } else {
                col.rotate_left(1);
            }
            for (r, tile) in col.into_iter().enumerate() {
                self.cells[r][index] = tile;
            }
            std::mem::swap(&mut self.free, &mut self.cells[entry][index]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell::Cell;
    use crate::board::layout::movable_pool;
    use crate::board::tile::{Tile, ALL_QUESTS};

    /// A standard-layout board whose movable tiles are all distinguishable.
    ///
    /// Quests are reused as labels on movable tiles; only identity matters.
    fn labelled_board() -> Board {
        let mut pool = movable_pool();
        for (i, tile) in pool.iter_mut().enumerate() {
            let paths = if i < 24 { Direction::NS } else { Direction::EW };
            *tile = Tile::quest(paths, ALL_QUESTS[i % 24]);
        }
        Board::new(pool).unwrap()
    }

    fn row_of(board: &Board, r: usize) -> Vec<Tile> {
        board.rows()[r].to_vec()
    }

    fn col_of(board: &Board, c: usize) -> Vec<Tile> {
        (0..BOARD_SIZE).map(|r| board.rows()[r][c]).collect()
    }

    #[test]
    fn rejects_even_lines_without_mutation() {
        let board = labelled_board();
        for index in [0, 2, 4, 6] {
            for d in CARDINALS {
                for rotation in 0..4 {
                    let mut b = board.clone();
                    let err = b.shift(Shift::new(d, index, rotation)).unwrap_err();
                    assert_eq!(err, ShiftError::FixedLine(index));
                    assert_eq!(b, board);
                }
            }
        }
    }

    #[test]
    fn rejects_off_board_index() {
        let mut board = labelled_board();
        assert_eq!(
            board.shift(Shift::new(Direction::EAST, 7, 0)),
            Err(ShiftError::IndexOutOfRange(7))
        );
    }

    #[test]
    fn rejects_combined_directions() {
        let board = labelled_board();
        for d in [Direction::NONE, Direction::NW, Direction::EW, Direction::NSEW] {
            let mut b = board.clone();
            assert_eq!(
                b.shift(Shift::new(d, 1, 0)),
                Err(ShiftError::NotCardinal(d))
            );
            assert_eq!(b, board);
        }
    }

    #[test]
    fn east_slides_row_right() {
        let mut board = labelled_board();
        let before = row_of(&board, 1);
        let free = *board.free_tile();

        board.shift(Shift::new(Direction::EAST, 1, 0)).unwrap();

        let after = row_of(&board, 1);
        assert_eq!(after[0], free);
        assert_eq!(&after[1..], &before[..6]);
        assert_eq!(*board.free_tile(), before[6]);
    }

    #[test]
    fn west_slides_row_left() {
        let mut board = labelled_board();
        let before = row_of(&board, 3);
        let free = *board.free_tile();

        board.shift(Shift::new(Direction::WEST, 3, 0)).unwrap();

        let after = row_of(&board, 3);
        assert_eq!(&after[..6], &before[1..]);
        assert_eq!(after[6], free);
        assert_eq!(*board.free_tile(), before[0]);
    }

    #[test]
    fn south_slides_column_down() {
        let mut board = labelled_board();
        let before = col_of(&board, 5);
        let free = *board.free_tile();

        board.shift(Shift::new(Direction::SOUTH, 5, 0)).unwrap();

        let after = col_of(&board, 5);
        assert_eq!(after[0], free);
        assert_eq!(&after[1..], &before[..6]);
        assert_eq!(*board.free_tile(), before[6]);
    }

    #[test]
    fn north_slides_column_up() {
        let mut board = labelled_board();
        let before = col_of(&board, 1);
        let free = *board.free_tile();

        board.shift(Shift::new(Direction::NORTH, 1, 0)).unwrap();

        let after = col_of(&board, 1);
        assert_eq!(&after[..6], &before[1..]);
        assert_eq!(after[6], free);
        assert_eq!(*board.free_tile(), before[0]);
    }

    #[test]
    fn free_tile_is_rotated_before_insertion() {
        let mut board = labelled_board();
        let free = *board.free_tile();
        board.shift(Shift::new(Direction::EAST, 5, 3)).unwrap();
        assert_eq!(*board.tile_at(Cell::new(5, 0).unwrap()), free.rotated(3));
    }

    #[test]
    fn other_lines_are_untouched() {
        let mut board = labelled_board();
        let before = board.clone();
        board.shift(Shift::new(Direction::SOUTH, 3, 1)).unwrap();
        for cell in Cell::all().filter(|c| c.col() != 3) {
            assert_eq!(board.tile_at(cell), before.tile_at(cell));
        }
        assert!(board.fixed_tiles_intact());
    }

    #[test]
    fn opposite_shifts_restore_the_line() {
        let original = labelled_board();
        for shift in Shift::all() {
            let mut board = original.clone();
            board.shift(shift).unwrap();
            let back = Shift::new(shift.direction.opposite(), shift.index, 0);
            board.shift(back).unwrap();
            assert_eq!(board, original, "shift {} then {}", shift, back);
        }
    }

    #[test]
    fn reverse_detection() {
        let a = Shift::new(Direction::EAST, 3, 0);
        assert!(Shift::new(Direction::WEST, 3, 2).reverses(&a));
        assert!(!Shift::new(Direction::WEST, 5, 0).reverses(&a));
        assert!(!Shift::new(Direction::EAST, 3, 0).reverses(&a));
        assert!(!Shift::new(Direction::NORTH, 3, 0).reverses(&a));
    }

    #[test]
    fn all_lists_twelve_shifts() {
        let shifts: Vec<Shift> = Shift::all().collect();
        assert_eq!(shifts.len(), 12);
        assert!(shifts.iter().all(|s| s.validate().is_ok()));
    }
}
