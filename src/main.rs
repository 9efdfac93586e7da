//! Headless self-play driver.
//!
//! Run with:
//! `cargo run --release -- --difficulty medium --max-plies 120 --seed 7`
//! `RUST_LOG=debug cargo run --release -- --fen "<fen>" --verbose`

use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use plum_rules::engines::difficulty::Difficulty;
use plum_rules::utils::pgn::PgnHeaders;
use plum_rules::utils::render_game_state::render_game_state;
use plum_rules::{ChessGame, Color};

struct Args {
    white: Difficulty,
    black: Difficulty,
    fen: Option<String>,
    max_plies: usize,
    seed: Option<u64>,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            white: Difficulty::Medium,
            black: Difficulty::Medium,
            fen: None,
            max_plies: 200,
            seed: None,
            verbose: false,
        }
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(flag) = it.next() {
        let mut value = |name: &str| {
            it.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--difficulty" => {
                let level: Difficulty = value("--difficulty")?.parse().map_err(|e| format!("{e}"))?;
                args.white = level;
                args.black = level;
            }
            "--white" => args.white = value("--white")?.parse().map_err(|e| format!("{e}"))?,
            "--black" => args.black = value("--black")?.parse().map_err(|e| format!("{e}"))?,
            "--fen" => args.fen = Some(value("--fen")?),
            "--max-plies" => {
                args.max_plies = value("--max-plies")?
                    .parse()
                    .map_err(|e| format!("invalid --max-plies: {e}"))?
            }
            "--seed" => {
                args.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|e| format!("invalid --seed: {e}"))?,
                )
            }
            "--verbose" | "-v" => args.verbose = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(args)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;

    let mut game = match &args.fen {
        Some(fen) => ChessGame::from_fen(fen).map_err(|e| e.to_string())?,
        None => ChessGame::new(),
    };
    game.set_pgn_headers(PgnHeaders {
        event: "Self-play".to_owned(),
        white: format!("Plum Rules ({})", args.white),
        black: format!("Plum Rules ({})", args.black),
        ..PgnHeaders::default()
    });

    let mut white = args.white.engine(args.seed);
    let mut black = args.black.engine(args.seed.map(|s| s.wrapping_add(1)));

    let started = Instant::now();
    let mut total_nodes = 0u64;
    let mut plies = 0usize;

    while !game.is_game_over() && plies < args.max_plies {
        let engine = match game.turn() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let out = engine.choose_move(game.state());
        total_nodes += out.nodes;

        let Some(mv) = out.best_move else {
            break;
        };
        if !game.make_move(&mv) {
            return Err(format!("engine {} produced illegal move {mv}", engine.name()));
        }
        plies += 1;

        if args.verbose {
            println!("{}\n", render_game_state(game.state()));
        }
    }

    info!(
        plies,
        nodes = total_nodes,
        elapsed_ms = started.elapsed().as_millis() as u64,
        status = %game.status(),
        "self-play finished"
    );

    println!("{}", game.to_pgn());
    Ok(())
}
