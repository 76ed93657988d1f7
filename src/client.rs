//! Move selection.
//!
//! A client looks at the game and returns a move for the current player.
//! `RandomClient` picks any legal shift and any reachable cell.
//! `SeekingClient` looks one turn ahead for a shift that connects the
//! player to their next target and falls back to a random move otherwise.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Direction, Shift};
use crate::game::{Game, Move};

/// Chooses a move for the player whose turn it is.
pub trait Client {
    fn choose_move(&mut self, game: &Game) -> Move;
}

/// Returns a uniformly random legal move for the current player.
pub fn random_move(game: &Game, rng: &mut impl Rng) -> Move {
    let position = game.current_player().position;
    let shifts: Vec<Shift> = game.legal_shifts().collect();
    let mut shift = match shifts.choose(rng) {
        Some(s) => *s,
        None => return stay_put(game),
    };
    shift.rotation = rng.gen_range(0..4);

    let destination = match game.reachable_after(shift) {
        Ok(reachable) => {
            let cells: Vec<_> = reachable.iter().collect();
            cells.choose(rng).copied().unwrap_or(position)
        }
        Err(_) => position,
    };

    Move { shift, destination }
}

/// Returns a move that reaches the current target this turn, if one exists.
///
/// Candidate shifts are tried in a random order so ties are broken fairly.
pub fn seeking_move(game: &Game, rng: &mut impl Rng) -> Option<Move> {
    let player = game.current_player();
    let target = player.current_target()?;

    let mut candidates: Vec<Shift> = game
        .legal_shifts()
        .flat_map(|s| (0..4).map(move |rotation| Shift { rotation, ..s }))
        .collect();
    candidates.shuffle(rng);

    for shift in candidates {
        let mut maze = game.maze().clone();
        if maze.apply_shift(shift).is_err() {
            continue;
        }
        if let Some(cell) = maze.board().locate(target) {
            if maze.can_reach(player.position, cell) {
                return Some(Move {
                    shift,
                    destination: cell,
                });
            }
        }
    }
    None
}

/// Keeps the player in place after the first legal shift.
fn stay_put(game: &Game) -> Move {
    let shift = game
        .legal_shifts()
        .next()
        .unwrap_or(Shift::new(Direction::EAST, 1, 0));
    Move {
        shift,
        destination: game.current_player().position,
    }
}

/// Plays uniformly random legal moves.
pub struct RandomClient<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomClient<R> {
    pub fn new(rng: R) -> Self {
        RandomClient { rng }
    }
}

impl<R: Rng> Client for RandomClient<R> {
    fn choose_move(&mut self, game: &Game) -> Move {
        random_move(game, &mut self.rng)
    }
}

/// Heads for the current target whenever one shift is enough to reach it.
pub struct SeekingClient<R: Rng> {
    rng: R,
}

impl<R: Rng> SeekingClient<R> {
    pub fn new(rng: R) -> Self {
        SeekingClient { rng }
    }
}

impl<R: Rng> Client for SeekingClient<R> {
    fn choose_move(&mut self, game: &Game) -> Move {
        match seeking_move(game, &mut self.rng) {
            Some(mv) => mv,
            None => random_move(game, &mut self.rng),
        }
    }
}
