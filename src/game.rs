//! Turn loop.
//!
//! A `Game` owns a maze and up to four players. Each turn the current
//! player shifts a line and then walks to any cell connected to their own.
//! Landing on the tile that carries their next target collects it. Each
//! player's last target is their own start corner; reaching it finishes
//! them.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::board::{
    start_cell, Board, BoardError, Cell, CellSet, Color, Maze, Occupant, Shift, ShiftError,
    Tile, ALL_QUESTS, QUEST_COUNT,
};

/// Maximum number of players.
pub const MAX_PLAYERS: usize = 4;

/// Errors that reject a turn or a game setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Shift(#[from] ShiftError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("a game needs 1 to 4 players, got {0}")]
    PlayerCount(usize),

    #[error("color {0} is seated twice")]
    DuplicateColor(Color),

    #[error("can't reverse last move ({0})")]
    ReversesLastShift(Shift),

    #[error("{color} can't move from {from} to {to}")]
    Unreachable { color: Color, from: Cell, to: Cell },

    #[error("the game is over")]
    GameOver,
}

/// A player's token and remaining targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
    pub position: Cell,
    /// Targets still to collect, front first.
    pub targets: VecDeque<Occupant>,
}

impl Player {
    pub fn current_target(&self) -> Option<Occupant> {
        self.targets.front().copied()
    }

    pub fn remaining(&self) -> usize {
        self.targets.len()
    }

    pub fn is_finished(&self) -> bool {
        self.targets.is_empty()
    }
}

/// One turn's decision: a shift and then a destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub shift: Shift,
    pub destination: Cell,
}

/// A move as it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub color: Color,
    pub shift: Shift,
    pub destination: Cell,
    pub collected: Option<Occupant>,
}

/// What happened during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub color: Color,
    pub collected: Option<Occupant>,
    /// The player collected their last target this turn.
    pub finished: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    maze: Maze,
    players: Vec<Player>,
    current: usize,
    history: Vec<MoveRecord>,
    winners: Vec<Color>,
}

impl Game {
    /// Starts a game on a random board, dealing quests at random.
    pub fn new(colors: &[Color], rng: &mut impl Rng) -> Result<Game, GameError> {
        let board = Board::random(rng);
        Game::with_board(board, colors, rng)
    }

    /// Starts a game on a board laid out from a caller-prepared movable pool.
    pub fn with_pool(
        pool: Vec<Tile>,
        colors: &[Color],
        rng: &mut impl Rng,
    ) -> Result<Game, GameError> {
        let board = Board::new(pool)?;
        Game::with_board(board, colors, rng)
    }

    /// Starts a game on the given board, dealing quests at random.
    ///
    /// The 24 quests are shuffled and split into equal hands of
    /// `24 / players`; any remainder stays undealt. Every hand ends with the
    /// player's own start marker.
    pub fn with_board(
        board: Board,
        colors: &[Color],
        rng: &mut impl Rng,
    ) -> Result<Game, GameError> {
        check_seating(colors)?;

        let mut deck = ALL_QUESTS.to_vec();
        deck.shuffle(rng);
        let hand = QUEST_COUNT / colors.len();

        let players = colors
            .iter()
            .zip(deck.chunks(hand))
            .map(|(&color, quests)| {
                let mut targets: VecDeque<Occupant> =
                    quests.iter().map(|&q| Occupant::Quest(q)).collect();
                targets.push_back(Occupant::Start(color));
                Player {
                    color,
                    position: start_cell(color),
                    targets,
                }
            })
            .collect();

        Game::with_players(Maze::new(board), players)
    }

    /// Assembles a game from explicit parts. The first player moves first.
    pub fn with_players(maze: Maze, players: Vec<Player>) -> Result<Game, GameError> {
        let colors: Vec<Color> = players.iter().map(|p| p.color).collect();
        check_seating(&colors)?;

        let mut game = Game {
            maze,
            players,
            current: 0,
            history: Vec::new(),
            winners: Vec::new(),
        };
        for p in &game.players {
            if p.is_finished() {
                game.winners.push(p.color);
            }
        }
        if game.players.first().map_or(false, Player::is_finished) {
            game.advance();
        }
        Ok(game)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Colors that have finished, in finishing order.
    pub fn winners(&self) -> &[Color] {
        &self.winners
    }

    pub fn last_shift(&self) -> Option<Shift> {
        self.history.last().map(|m| m.shift)
    }

    /// The game ends once every player but one has finished. A solo game
    /// ends when its only player finishes.
    pub fn is_over(&self) -> bool {
        let needed = self.players.len().saturating_sub(1).max(1);
        self.winners.len() >= needed
    }

    /// Cells the current player could walk to after `shift`.
    pub fn reachable_after(&self, shift: Shift) -> Result<CellSet, GameError> {
        self.check_shift(shift)?;
        let mut maze = self.maze.clone();
        maze.apply_shift(shift)?;
        Ok(maze.reachable_from(self.current_player().position))
    }

    /// Shifts the current player may make this turn, with no rotation.
    pub fn legal_shifts(&self) -> impl Iterator<Item = Shift> + '_ {
        let last = self.last_shift();
        Shift::all().filter(move |s| last.map_or(true, |l| !s.reverses(&l)))
    }

    /// Checks a shift against the board and the no-reversal rule.
    pub fn check_shift(&self, shift: Shift) -> Result<(), GameError> {
        shift.validate()?;
        if let Some(last) = self.last_shift() {
            if shift.reverses(&last) {
                return Err(GameError::ReversesLastShift(shift));
            }
        }
        Ok(())
    }

    /// Plays one turn for the current player.
    ///
    /// The turn is all-or-nothing: if the shift is illegal or the
    /// destination is not connected to the player after the shift, the
    /// game is left exactly as it was.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.check_shift(mv.shift)?;

        let mut maze = self.maze.clone();
        maze.apply_shift(mv.shift)?;

        let player = &self.players[self.current];
        if !maze.can_reach(player.position, mv.destination) {
            return Err(GameError::Unreachable {
                color: player.color,
                from: player.position,
                to: mv.destination,
            });
        }

        self.maze = maze;
        let landed_on = self.maze.tile_at(mv.destination).occupant;
        let player = &mut self.players[self.current];
        player.position = mv.destination;

        let mut collected = None;
        if landed_on.is_some() && landed_on == player.current_target() {
            collected = player.targets.pop_front();
        }
        let color = player.color;
        let finished = collected.is_some() && player.is_finished();
        if finished {
            self.winners.push(color);
        }

        self.history.push(MoveRecord {
            color,
            shift: mv.shift,
            destination: mv.destination,
            collected,
        });

        let game_over = self.is_over();
        if !game_over {
            self.advance();
        }

        Ok(TurnOutcome {
            color,
            collected,
            finished,
            game_over,
        })
    }

    /// Passes the turn to the next player who still has targets.
    fn advance(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let next = (self.current + step) % n;
            if !self.players[next].is_finished() {
                self.current = next;
                return;
            }
        }
    }
}

fn check_seating(colors: &[Color]) -> Result<(), GameError> {
    if colors.is_empty() || colors.len() > MAX_PLAYERS {
        return Err(GameError::PlayerCount(colors.len()));
    }
    for (i, c) in colors.iter().enumerate() {
        if colors[..i].contains(c) {
            return Err(GameError::DuplicateColor(*c));
        }
    }
    Ok(())
}
