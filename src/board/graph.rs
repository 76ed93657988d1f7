//! Connectivity graph over the tile grid.
//!
//! Two neighbouring cells are linked only when both tiles agree: the source
//! must be open toward the neighbour AND the neighbour must be open back
//! toward the source. A one-sided opening is a dead end.
//!
//! The graph is a partition of the 49 cells into connected components. It
//! is rebuilt from scratch after every board change; at this board size a
//! full flood fill is cheaper than tracking incremental updates.

use super::cell::{Cell, CellSet, CELL_COUNT};
use super::direction::{Direction, CARDINALS};
use super::state::Board;

/// Returns the cell linked to `cell` in direction `dir`, if both tiles
/// open toward each other.
pub fn linked_neighbor(board: &Board, cell: Cell, dir: Direction) -> Option<Cell> {
    if !board.tile_at(cell).is_open(dir) {
        return None;
    }
    let next = cell.step(dir)?;
    if board.tile_at(next).is_open(dir.opposite()) {
        Some(next)
    } else {
        None
    }
}

/// Iterates the cells directly linked to `cell`.
pub fn linked_neighbors(board: &Board, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    CARDINALS
        .into_iter()
        .filter_map(move |dir| linked_neighbor(board, cell, dir))
}

/// Reachability classes for every cell of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Component id of each cell, indexed by `Cell::index`.
    component: [u8; CELL_COUNT],
    /// Member set of each component, indexed by component id.
    classes: Vec<CellSet>,
}

impl Graph {
    /// Computes the connected components of `board`.
    ///
    /// Components are numbered in row-major order of their first cell, so
    /// the numbering depends only on the partition itself.
    pub fn compute(board: &Board) -> Graph {
        let mut component = [u8::MAX; CELL_COUNT];
        let mut classes = Vec::new();
        let mut stack: Vec<Cell> = Vec::with_capacity(CELL_COUNT);

        for start in Cell::all() {
            if component[start.index()] != u8::MAX {
                continue;
            }
            let id = classes.len() as u8;
            let mut members = CellSet::new();

            component[start.index()] = id;
            stack.push(start);
            while let Some(cell) = stack.pop() {
                members.insert(cell);
                for next in linked_neighbors(board, cell) {
                    if component[next.index()] == u8::MAX {
                        component[next.index()] = id;
                        stack.push(next);
                    }
                }
            }
            classes.push(members);
        }

        Graph { component, classes }
    }

    /// Returns every cell reachable from `cell`, including `cell` itself.
    pub fn reachable_from(&self, cell: Cell) -> CellSet {
        self.classes[self.component[cell.index()] as usize]
    }

    /// Returns true if a path of agreeing openings joins `a` and `b`.
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        self.component[a.index()] == self.component[b.index()]
    }

    pub fn component_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns all components in order of their first cell.
    pub fn components(&self) -> &[CellSet] {
        &self.classes
    }

    /// The smallest (row, col) cell in the component holding `cell`.
    ///
    /// Used to label sectors when printing the board.
    pub fn sector_anchor(&self, cell: Cell) -> Cell {
        self.reachable_from(cell).first().unwrap_or(cell)
    }
}
