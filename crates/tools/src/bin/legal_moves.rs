use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;

use rchess_core::{CastlingRights, Color, Game, GameStatus, Move, Square};
use tools::{parse_fen, parse_move, render_board, STARTPOS_FEN};

#[derive(Parser)]
#[command(name = "legal_moves")]
#[command(about = "Show a position and the moves available to the side to move")]
struct Args {
    /// FEN of the position (default: initial position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Moves in coordinate notation applied before listing (e.g. "e2e4 e7e5")
    #[arg(short, long)]
    moves: Option<String>,

    /// List pseudo-legal moves (own king safety not checked) instead of legal moves
    #[arg(long)]
    pseudo: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Serialize)]
struct Report {
    side_to_move: Color,
    status: GameStatus,
    castling: CastlingRights,
    en_passant: Option<Square>,
    moves: Vec<MoveEntry>,
}

#[derive(Serialize)]
struct MoveEntry {
    notation: String,
    #[serde(flatten)]
    mv: Move,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug);

    let fen = args.fen.as_deref().unwrap_or(STARTPOS_FEN);
    let mut game = parse_fen(fen).with_context(|| format!("failed to parse FEN: {fen}"))?;
    if let Some(moves) = args.moves.as_deref() {
        for text in moves.split_whitespace() {
            let mv = parse_move(game.position(), game.side_to_move(), text)
                .with_context(|| format!("cannot apply move {text}"))?;
            game.play(mv)?;
        }
    }

    let moves = if args.pseudo {
        game.position().pseudo_legal_moves(game.side_to_move())
    } else {
        game.legal_moves()
    };
    debug!("{} moves for {}", moves.len(), game.side_to_move());

    if args.json {
        print_json(&game, moves.to_vec())
    } else {
        print_text(&game, &moves.to_vec(), args.pseudo);
        Ok(())
    }
}

fn print_json(game: &Game, moves: Vec<Move>) -> Result<()> {
    let pos = game.position();
    let report = Report {
        side_to_move: game.side_to_move(),
        status: game.status(),
        castling: *pos.castling_rights(),
        en_passant: pos.en_passant(),
        moves: moves
            .into_iter()
            .map(|mv| MoveEntry {
                notation: mv.to_string(),
                mv,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}

fn print_text(game: &Game, moves: &[Move], pseudo: bool) {
    print!("{}", render_board(game.position(), true));
    println!();
    println!("Side to move: {}", game.side_to_move());
    println!("Status: {:?}", game.status());

    let kind = if pseudo { "Pseudo-legal" } else { "Legal" };
    println!("\n{kind} moves ({}):", moves.len());
    for mv in moves {
        println!("  {:<6} {:?} {} -> {}", mv.to_string(), mv.piece_type, mv.from, mv.to);
    }
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
