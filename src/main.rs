//! Self-play game generation CLI.
//!
//! Plays Labyrinth games between computer clients and writes one JSON
//! record per game.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --players N       Players per game, 1-4 (default: 2)
//!   --colors LIST     Seat these colors in order, e.g. red,blue
//!   --max-turns N     Turn limit per game (default: 5000)
//!   --client KIND     random or seeking (default: seeking)
//!   --threads N       Number of parallel threads (default: 4)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --show            Print each final board to stderr
//!   --quiet           Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use labyrinth::board::{Color, ALL_COLORS};
use labyrinth::game::MAX_PLAYERS;
use labyrinth::selfplay::{self, ClientKind, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" => {
                i += 1;
                config.num_games = parse_value(flag, args.get(i));
            }
            "--players" => {
                i += 1;
                let players: usize = parse_value(flag, args.get(i));
                if players == 0 || players > MAX_PLAYERS {
                    fail(&format!("--players must be between 1 and {}", MAX_PLAYERS));
                }
                config.colors = ALL_COLORS[..players].to_vec();
            }
            "--colors" => {
                i += 1;
                let list: String = parse_value(flag, args.get(i));
                config.colors = list
                    .split(',')
                    .map(|name| match Color::from_name(name.trim()) {
                        Some(color) => color,
                        None => fail(&format!("unknown color: {}", name)),
                    })
                    .collect();
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = parse_value(flag, args.get(i));
            }
            "--client" => {
                i += 1;
                let name: String = parse_value(flag, args.get(i));
                config.client = match ClientKind::from_name(&name) {
                    Some(kind) => kind,
                    None => fail(&format!("unknown client: {}", name)),
                };
            }
            "--threads" => {
                i += 1;
                config.threads = parse_value(flag, args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(flag, args.get(i));
            }
            "--output" => {
                i += 1;
                output_path = Some(parse_value(flag, args.get(i)));
            }
            "--show" => {
                config.show_board = true;
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let quiet = config.quiet;
    if !quiet {
        eprintln!(
            "Self-play: {} games, {} players, {} clients, max {} turns, {} threads",
            config.num_games,
            config.colors.len(),
            config.client.name(),
            config.max_turns,
            config.threads
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("Self-play failed: {}", e);
            process::exit(2);
        }
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s ({:.1} games/sec)",
            games.len(),
            elapsed.as_secs_f64(),
            games.len() as f64 / elapsed.as_secs_f64().max(1e-9)
        );
        selfplay::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };
    match (written, output_path) {
        (Err(e), _) => {
            eprintln!("Failed to write output: {}", e);
            process::exit(1);
        }
        (Ok(()), Some(path)) if !quiet => {
            eprintln!("Wrote {} games to {}", games.len(), path);
        }
        _ => {}
    }
}

/// Parses the value following `flag`, exiting with usage on failure.
fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse()) {
        Some(Ok(v)) => v,
        Some(Err(_)) => fail(&format!("invalid {} value", flag)),
        None => fail(&format!("{} needs a value", flag)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: labyrinth [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --players N      Players per game, 1-4 (default: 2)");
    eprintln!("  --colors LIST    Seat these colors in order, e.g. red,blue");
    eprintln!("  --max-turns N    Turn limit per game (default: 5000)");
    eprintln!("  --client KIND    random or seeking (default: seeking)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --show           Print each final board to stderr");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
