//! Text rendering of the board.
//!
//! Each tile is drawn as three lines of seven columns using box-drawing
//! glyphs. A double stroke leaves the tile on every open side.

use std::fmt::Write;

use crate::board::{Board, Cell, Direction, Maze, Tile, BOARD_SIZE};

/// Width in characters of one rendered board line.
pub const LINE_WIDTH: usize = 7 * BOARD_SIZE;

/// Draws one tile with `label` centred inside it. Labels longer than three
/// characters widen the middle line.
pub fn render_tile(tile: &Tile, label: &str) -> [String; 3] {
    let open = |d| tile.is_open(d);
    let north = if open(Direction::NORTH) { '╨' } else { '─' };
    let south = if open(Direction::SOUTH) { '╥' } else { '─' };
    let west = if open(Direction::WEST) { "═╡" } else { " │" };
    let east = if open(Direction::EAST) { "╞═" } else { "│ " };
    [
        format!(" ╭─{}─╮ ", north),
        format!("{}{:^3}{}", west, label, east),
        format!(" ╰─{}─╯ ", south),
    ]
}

fn render_grid<F>(board: &Board, mut label: F) -> String
where
    F: FnMut(Cell, &Tile) -> String,
{
    let mut out = String::new();
    for (row, tiles) in board.rows().iter().enumerate() {
        let mut lines: [String; 3] = Default::default();
        for (col, tile) in tiles.iter().enumerate() {
            let Some(cell) = Cell::new(row, col) else {
                continue;
            };
            let drawn = render_tile(tile, &label(cell, tile));
            for (line, part) in lines.iter_mut().zip(drawn.iter()) {
                line.push_str(part);
            }
        }
        for line in &lines {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

/// Draws the grid with each tile's item symbol in its centre.
pub fn render_board(board: &Board) -> String {
    render_grid(board, |_, tile| tile.symbol().to_string())
}

/// Draws the grid with each tile labelled by its sector: the smallest cell
/// it is connected to. Tiles sharing a label are mutually reachable.
pub fn render_sectors(maze: &Maze) -> String {
    render_grid(maze.board(), |cell, _| maze.graph().sector_anchor(cell).to_string())
}

/// Draws the free tile on its own.
pub fn render_free(tile: &Tile) -> String {
    let mut out = String::new();
    for line in render_tile(tile, &tile.symbol().to_string()) {
        let _ = writeln!(out, "{}", line);
    }
    out
}
