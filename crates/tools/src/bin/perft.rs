use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use rchess_core::Game;
use tools::{divide, parse_fen, parse_move, perft, STARTPOS_FEN};

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Count leaf nodes of the legal move tree from a position")]
struct Args {
    /// FEN of the root position (default: initial position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Moves in coordinate notation applied to the root before counting (e.g. "e2e4 e7e5")
    #[arg(short, long)]
    moves: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug);

    if args.depth < 1 {
        bail!("--depth must be >= 1");
    }

    let fen = args.fen.as_deref().unwrap_or(STARTPOS_FEN);
    let mut game = parse_fen(fen).with_context(|| format!("failed to parse FEN: {fen}"))?;
    if let Some(moves) = args.moves.as_deref() {
        apply_moves(&mut game, moves)?;
    }
    info!("perft depth {} from {fen}", args.depth);

    let pos = game.position();
    let color = game.side_to_move();
    let start = Instant::now();

    let nodes = if args.divide {
        let split = divide(pos, color, args.depth);
        for (mv, count) in &split {
            println!("{mv}: {count}");
        }
        println!();
        split.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(pos, color, args.depth)
    };

    let elapsed = start.elapsed();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        (nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    println!("Nodes: {nodes}");
    println!("Time: {:.3}s ({nps} nps)", elapsed.as_secs_f64());
    Ok(())
}

fn apply_moves(game: &mut Game, moves: &str) -> Result<()> {
    for text in moves.split_whitespace() {
        let mv = parse_move(game.position(), game.side_to_move(), text)
            .with_context(|| format!("cannot apply move {text}"))?;
        game.play(mv)?;
    }
    Ok(())
}

fn init_logger(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();
}
