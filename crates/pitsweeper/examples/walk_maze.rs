//! Walk an agent through a pit maze, stepping only on tiles it can prove safe
//!
//! Usage: walk_maze [maze_file] [--max-rounds <n>] [--timeout-ms <n>]
//!
//! Set `RUST_LOG=pitsweeper=debug` to see the engine's tracing output.

use pitsweeper::{Clause, Location, MazeKnowledge, Proposition, QueryOptions, Safety, TileKind};
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAZE: &str = "
    ..1P1
    ..11.
    .1P1.
    ..1..
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut maze_file: Option<String> = None;
    let mut options = QueryOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-rounds" => {
                if i + 1 < args.len() {
                    options.max_rounds = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--timeout-ms" => {
                if i + 1 < args.len() {
                    options.timeout_ms = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            other if !other.starts_with("--") => maze_file = Some(other.to_string()),
            other => eprintln!("Unknown option: {}", other),
        }
        i += 1;
    }

    let text = match &maze_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => DEFAULT_MAZE.to_string(),
    };

    let config = match options.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid options: {}", e);
            std::process::exit(1);
        }
    };

    let grid = match parse_grid(&text) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid maze: {}", e);
            std::process::exit(1);
        }
    };

    let mut knowledge = MazeKnowledge::with_config(config);
    let mut visited: Vec<Location> = Vec::new();
    let mut pending = vec![Location::new(0, 0)];

    while let Some(location) = pending.pop() {
        if visited.contains(&location) {
            continue;
        }
        let Some(tile) = tile_at(&grid, location) else {
            continue;
        };
        println!("step {:>2}: {} {:?}", visited.len() + 1, location, tile);
        if let Err(e) = knowledge.observe(location, tile, &neighbors(&grid, location)) {
            eprintln!("Observation failed: {}", e);
            std::process::exit(1);
        }
        visited.push(location);

        let frontier: BTreeSet<Location> = visited
            .iter()
            .flat_map(|v| neighbors(&grid, *v))
            .filter(|n| !visited.contains(n))
            .collect();
        match knowledge.settle(frontier) {
            Ok(settled) => {
                for (candidate, safety) in settled {
                    if safety == Safety::Safe && !pending.contains(&candidate) {
                        pending.push(candidate);
                    }
                }
            }
            Err(e) => {
                eprintln!("Settling failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!();
    for (row, tiles) in grid.iter().enumerate() {
        let line: String = (0..tiles.len())
            .map(|col| match knowledge.classify(Location::new(col as i32, row as i32)) {
                Safety::Safe if visited.contains(&Location::new(col as i32, row as i32)) => 'o',
                Safety::Safe => '.',
                Safety::Pit => 'X',
                Safety::Unknown => '?',
            })
            .collect();
        println!("  {}", line);
    }
    println!();
    println!(
        "visited {} tiles, proved {} pits, {} clauses left",
        visited.len(),
        knowledge.known_pits().len(),
        knowledge.kb().len()
    );

    // Show the proof behind the first confirmed pit
    if let Some(pit) = knowledge.known_pits().iter().next() {
        let outcome = knowledge.kb().entails(&Clause::unit(Proposition::pit(*pit), true));
        match serde_json::to_string_pretty(&outcome.to_json()) {
            Ok(json) => println!("\nwhy {} is a pit:\n{}", pit, json),
            Err(e) => eprintln!("Error serializing proof: {}", e),
        }
    }
}

fn parse_grid(text: &str) -> pitsweeper::Result<Vec<Vec<TileKind>>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(TileKind::from_symbol).collect())
        .collect()
}

fn tile_at(grid: &[Vec<TileKind>], location: Location) -> Option<TileKind> {
    if location.col < 0 || location.row < 0 {
        return None;
    }
    grid.get(location.row as usize)
        .and_then(|row| row.get(location.col as usize))
        .copied()
}

fn neighbors(grid: &[Vec<TileKind>], location: Location) -> Vec<Location> {
    location
        .cardinal_neighbors()
        .into_iter()
        .filter(|n| tile_at(grid, *n).is_some())
        .collect()
}
