//! A board paired with its connectivity graph.
//!
//! `Maze` is the unit callers mutate: every successful shift rebuilds the
//! graph before returning, so readers never see a graph that lags the board.

use super::cell::{Cell, CellSet};
use super::graph::Graph;
use super::shift::{Shift, ShiftError};
use super::state::Board;
use super::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    board: Board,
    graph: Graph,
}

impl Maze {
    pub fn new(board: Board) -> Self {
        let graph = Graph::compute(&board);
        Maze { board, graph }
    }

    /// Shifts a line and recomputes the graph.
    ///
    /// A rejected shift leaves both board and graph untouched.
    pub fn apply_shift(&mut self, shift: Shift) -> Result<(), ShiftError> {
        self.board.shift(shift)?;
        self.graph = Graph::compute(&self.board);
        Ok(())
    }

    pub fn reachable_from(&self, cell: Cell) -> CellSet {
        self.graph.reachable_from(cell)
    }

    pub fn can_reach(&self, from: Cell, to: Cell) -> bool {
        self.graph.connected(from, to)
    }

    pub fn tile_at(&self, cell: Cell) -> &Tile {
        self.board.tile_at(cell)
    }

    pub fn free_tile(&self) -> &Tile {
        self.board.free_tile()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::direction::Direction;
    use crate::board::layout::movable_pool;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn graph_tracks_shifts() {
        let mut maze = Maze::new(Board::random(&mut SmallRng::seed_from_u64(3)));
        for shift in Shift::all() {
            maze.apply_shift(Shift { rotation: 1, ..shift }).unwrap();
            assert_eq!(*maze.graph(), Graph::compute(maze.board()));
        }
    }

    #[test]
    fn rejected_shift_changes_nothing() {
        let mut maze = Maze::new(Board::new(movable_pool()).unwrap());
        let before = maze.clone();
        assert!(maze.apply_shift(Shift::new(Direction::SOUTH, 2, 1)).is_err());
        assert_eq!(maze, before);
    }

    #[test]
    fn every_cell_reaches_itself() {
        let maze = Maze::new(Board::random(&mut SmallRng::seed_from_u64(11)));
        for cell in Cell::all() {
            assert!(maze.reachable_from(cell).contains(cell));
            assert!(maze.can_reach(cell, cell));
        }
    }
}
