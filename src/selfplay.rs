//! Self-play game generation.
//!
//! Plays complete games between computer clients and records every move,
//! for regression testing and for tuning clients. Games run sequentially
//! or across a rayon thread pool; each game is seeded independently so a
//! fixed seed reproduces the same records regardless of thread count.

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Color, ALL_COLORS};
use crate::client::{Client, RandomClient, SeekingClient};
use crate::game::{Game, GameError, MoveRecord, MAX_PLAYERS};
use crate::render::{render_board, render_free};

/// Which client plays every seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Random,
    Seeking,
}

impl ClientKind {
    pub fn from_name(s: &str) -> Option<ClientKind> {
        match s {
            "random" => Some(ClientKind::Random),
            "seeking" => Some(ClientKind::Seeking),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ClientKind::Random => "random",
            ClientKind::Seeking => "seeking",
        }
    }

    fn build(self, rng: SmallRng) -> Box<dyn Client> {
        match self {
            ClientKind::Random => Box::new(RandomClient::new(rng)),
            ClientKind::Seeking => Box::new(SeekingClient::new(rng)),
        }
    }
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Seating order; one player per color.
    pub colors: Vec<Color>,
    /// Turns after which an unfinished game is abandoned.
    pub max_turns: usize,
    /// Client used for every seat.
    pub client: ClientKind,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Print each game's final board to stderr.
    pub show_board: bool,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            colors: vec![Color::Red, Color::Yellow],
            max_turns: 5000,
            client: ClientKind::Seeking,
            threads: 4,
            seed: 0,
            show_board: false,
            quiet: false,
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Seed the game was played from, if one was fixed.
    pub seed: Option<u64>,
    /// Seating order.
    pub colors: Vec<Color>,
    /// Finishing order.
    pub winners: Vec<Color>,
    pub turns: usize,
    /// False if the game hit `max_turns` first.
    pub completed: bool,
    pub moves: Vec<MoveRecord>,
}

/// Plays one game to completion or until the turn limit.
///
/// The board, the deal and every client draw from generators derived from
/// `rng`, so the same generator state always replays the same game.
pub fn play_game(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<(GameRecord, Game), GameError> {
    let mut game = Game::new(&config.colors, rng)?;

    let mut clients: Vec<Box<dyn Client>> = (0..config.colors.len())
        .map(|_| config.client.build(SmallRng::seed_from_u64(rng.gen())))
        .collect();

    let mut turns = 0;
    while !game.is_over() && turns < config.max_turns {
        let mv = clients[game.current_index()].choose_move(&game);
        game.play(mv)?;
        turns += 1;
    }

    let record = GameRecord {
        game_id,
        seed: None,
        colors: config.colors.clone(),
        winners: game.winners().to_vec(),
        turns,
        completed: game.is_over(),
        moves: game.history().to_vec(),
    };
    Ok((record, game))
}

/// Runs self-play and returns every game record.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, GameError> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| games.push(game))?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Runs self-play, handing each record to `on_game` as soon as it finishes.
///
/// Records arrive in completion order, which differs from game ID order
/// when running in parallel. No new game starts after one fails; games
/// already running in parallel finish, and the first error is returned.
pub fn run_self_play_with_callback<F>(
    config: &SelfPlayConfig,
    on_game: F,
) -> Result<(), GameError>
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game)
    } else {
        run_self_play_sequential(config, on_game)
    }
}

/// Generator for game `i`: `seed + i`, or fresh entropy when the seed is 0.
fn game_rng(config: &SelfPlayConfig, i: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(i as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays game `i` and reports it on stderr unless quiet.
fn play_and_report(
    config: &SelfPlayConfig,
    i: usize,
    done: usize,
) -> Result<GameRecord, GameError> {
    let mut rng = game_rng(config, i);
    let game_start = Instant::now();
    let (mut record, game) = play_game(config, i, &mut rng)?;
    if config.seed != 0 {
        record.seed = Some(config.seed.wrapping_add(i as u64));
    }

    if !config.quiet {
        let elapsed = game_start.elapsed().as_secs_f64();
        let outcome = match record.winners.first() {
            Some(w) if record.completed => format!("{} wins", w),
            Some(w) => format!("{} first, unfinished", w),
            None => "unfinished".to_string(),
        };
        eprintln!(
            "Game {}/{}: {} in {} turns ({:.2}s)",
            done,
            config.num_games,
            outcome,
            record.turns,
            elapsed,
        );
    }
    if config.show_board {
        eprint!("{}", render_board(game.maze().board()));
        eprintln!("Free tile:");
        eprint!("{}", render_free(game.maze().free_tile()));
    }
    Ok(record)
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F) -> Result<(), GameError>
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let record = play_and_report(config, i, i + 1)?;
        on_game(record);
    }
    Ok(())
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F) -> Result<(), GameError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<Result<GameRecord, GameError>>();

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            if !config.quiet {
                eprintln!("Failed to build thread pool ({}), running sequentially", e);
            }
            return run_self_play_sequential(config, on_game);
        }
    };

    let failed = AtomicBool::new(false);
    let mut first_error = None;
    std::thread::scope(|s| {
        s.spawn(|| {
            pool.install(|| {
                (0..config.num_games)
                    .into_par_iter()
                    .for_each_with(tx, |tx, i| {
                        if failed.load(Ordering::Relaxed) {
                            return;
                        }
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        let result = play_and_report(config, i, done);
                        if result.is_err() {
                            failed.store(true, Ordering::Relaxed);
                        }
                        let _ = tx.send(result);
                    });
            });
        });

        // Receive completed games on this thread and pass them on.
        for result in rx {
            match result {
                Ok(record) => on_game(record),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
    });

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut win_counts = [0usize; MAX_PLAYERS];
    let mut unfinished = 0usize;
    let mut total_turns = 0usize;
    let mut total_collected = 0usize;

    for game in games {
        total_turns += game.turns;
        total_collected += game.moves.iter().filter(|m| m.collected.is_some()).count();
        if !game.completed {
            unfinished += 1;
        }
        if let Some(w) = game.winners.first() {
            if let Some(idx) = ALL_COLORS.iter().position(|c| c == w) {
                win_counts[idx] += 1;
            }
        }
    }

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg turns/game: {:.1}",
        total_turns as f64 / total.max(1) as f64
    );
    eprintln!(
        "Avg targets collected/game: {:.1}",
        total_collected as f64 / total.max(1) as f64
    );
    eprintln!("Unfinished (turn limit): {}", unfinished);
    eprintln!("First finisher:");
    for (i, color) in ALL_COLORS.iter().enumerate() {
        let pct = 100.0 * win_counts[i] as f64 / total.max(1) as f64;
        eprintln!("  {:>8}: {} ({:.1}%)", color.name(), win_counts[i], pct);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn config(num_games: usize, threads: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            threads,
            seed: 77,
            max_turns: 20_000,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn play_single_game_completes() {
        let cfg = config(1, 1);
        let mut rng = SmallRng::seed_from_u64(42);
        let (record, game) = play_game(&cfg, 0, &mut rng).unwrap();
        assert!(record.completed, "game stopped after {} turns", record.turns);
        assert!(game.is_over());
        assert_eq!(record.turns, record.moves.len());
        assert_eq!(record.winners.len(), 1);
        assert_eq!(record.colors, vec![Color::Red, Color::Yellow]);
        assert!(game.maze().board().fixed_tiles_intact());
    }

    #[test]
    fn turn_limit_stops_the_game() {
        let cfg = SelfPlayConfig {
            max_turns: 5,
            client: ClientKind::Random,
            ..config(1, 1)
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let (record, _) = play_game(&cfg, 0, &mut rng).unwrap();
        assert_eq!(record.turns, 5);
        assert!(!record.completed);
        assert_eq!(record.moves.len(), 5);
    }

    #[test]
    fn sequential_run_produces_correct_count() {
        let games = run_self_play(&config(3, 1)).unwrap();
        assert_eq!(games.len(), 3);
        for (i, g) in games.iter().enumerate() {
            assert_eq!(g.game_id, i);
            assert_eq!(g.seed, Some(77 + i as u64));
        }
    }

    #[test]
    fn parallel_run_produces_correct_count() {
        let games = run_self_play(&config(4, 2)).unwrap();
        assert_eq!(games.len(), 4);
        let ids: Vec<usize> = games.iter().map(|g| g.game_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn fixed_seed_is_reproducible_across_thread_counts() {
        let seq = run_self_play(&config(3, 1)).unwrap();
        let par = run_self_play(&config(3, 3)).unwrap();
        for (a, b) in seq.iter().zip(&par) {
            assert_eq!(a.turns, b.turns);
            assert_eq!(a.winners, b.winners);
            assert_eq!(a.moves, b.moves);
        }
    }

    #[test]
    fn random_clients_play_legal_games() {
        let cfg = SelfPlayConfig {
            colors: ALL_COLORS.to_vec(),
            max_turns: 300,
            client: ClientKind::Random,
            ..config(2, 1)
        };
        let games = run_self_play(&cfg).unwrap();
        assert_eq!(games.len(), 2);
        for g in &games {
            assert_eq!(g.colors.len(), 4);
            assert!(g.turns <= 300);
        }
    }

    #[test]
    fn failing_games_stop_the_run() {
        for threads in [1, 3] {
            let cfg = SelfPlayConfig {
                colors: vec![Color::Blue, Color::Blue],
                ..config(20, threads)
            };
            let mut delivered = 0;
            let err = run_self_play_with_callback(&cfg, |_| delivered += 1).unwrap_err();
            assert_eq!(err, GameError::DuplicateColor(Color::Blue));
            assert_eq!(delivered, 0);
        }
        let cfg = SelfPlayConfig {
            colors: Vec::new(),
            ..config(2, 1)
        };
        assert_eq!(run_self_play(&cfg).unwrap_err(), GameError::PlayerCount(0));
    }

    #[test]
    fn client_names_parse() {
        for kind in [ClientKind::Random, ClientKind::Seeking] {
            assert_eq!(ClientKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ClientKind::from_name("greedy"), None);
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = run_self_play(&config(2, 1)).unwrap();
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for (i, line) in lines.iter().enumerate() {
            let v: Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["game_id"], i);
            assert_eq!(v["colors"], serde_json::json!(["RED", "YELLOW"]));
            let moves = v["moves"].as_array().unwrap();
            assert_eq!(moves.len() as u64, v["turns"].as_u64().unwrap());
            let first = &moves[0];
            assert!(first["shift"]["direction"].is_array());
            assert!(first["destination"].is_array());
        }
    }
}
