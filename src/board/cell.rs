//! Grid coordinates and compact cell sets.

use std::fmt;

use serde::{Serialize, Serializer};

use super::direction::Direction;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 7;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the 7x7 grid. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Returns the cell at (row, col), or None if out of bounds.
    pub const fn new(row: usize, col: usize) -> Option<Cell> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Cell {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the cell for a row-major index in `0..CELL_COUNT`.
    pub const fn from_index(idx: usize) -> Option<Cell> {
        Cell::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..CELL_COUNT`.
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Fixed tiles sit where both coordinates are even.
    pub const fn is_fixed(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }

    /// The neighbouring cell one step in a single-flag direction.
    ///
    /// Returns None at the board edge or for a non-cardinal direction.
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset()?;
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Cell::new(row, col)
    }

    /// Iterates every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Serialized as `[row, col]`.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.row, self.col].serialize(serializer)
    }
}

/// A set of cells stored as a 49-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u64);

impl CellSet {
    pub const fn new() -> Self {
        CellSet(0)
    }

    pub fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1u64 << cell.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        self.0 & (1u64 << cell.index()) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the member cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let bits = self.0;
        (0..CELL_COUNT)
            .filter(move |i| bits & (1u64 << i) != 0)
            .filter_map(Cell::from_index)
    }

    /// The smallest member in (row, col) order.
    pub fn first(&self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            Cell::from_index(self.0.trailing_zeros() as usize)
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl Serialize for CellSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Cell::new(6, 6).is_some());
        assert!(Cell::new(7, 0).is_none());
        assert!(Cell::new(0, 7).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for (i, cell) in Cell::all().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(cell));
        }
        assert_eq!(Cell::all().count(), CELL_COUNT);
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Cell::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::NORTH), None);
        assert_eq!(corner.step(Direction::WEST), None);
        assert_eq!(corner.step(Direction::EAST), Cell::new(0, 1));
        assert_eq!(corner.step(Direction::SOUTH), Cell::new(1, 0));
        assert_eq!(corner.step(Direction::SE), None);

        let far = Cell::new(6, 6).unwrap();
        assert_eq!(far.step(Direction::SOUTH), None);
        assert_eq!(far.step(Direction::EAST), None);
    }

    #[test]
    fn fixed_cells() {
        let fixed = Cell::all().filter(|c| c.is_fixed()).count();
        assert_eq!(fixed, 16);
    }

    #[test]
    fn cell_set_basics() {
        let a = Cell::new(0, 1).unwrap();
        let b = Cell::new(6, 6).unwrap();
        let mut set = CellSet::new();
        assert!(set.is_empty());
        assert!(set.insert(b));
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert_eq!(set.len(), 2);
        assert!(set.contains(a));
        assert!(!set.contains(Cell::new(3, 3).unwrap()));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(set.first(), Some(a));
    }

    #[test]
    fn cell_json() {
        let set: CellSet = [Cell::new(1, 2).unwrap(), Cell::new(0, 0).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[[0,0],[1,2]]");
    }
}
