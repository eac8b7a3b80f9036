use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ruleboard::engines::engine_random::RandomEngine;
use ruleboard::engines::engine_trait::Engine;
use ruleboard::game_state::bitboard::BitBoard;
use ruleboard::game_state::chess_rules::STARTING_POSITION_FEN;
use ruleboard::game_state::chess_types::Color;
use ruleboard::session::chess_game::ChessGame;
use ruleboard::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use ruleboard::utils::render_game_state::{render_game_state, render_with_targets};
use ruleboard::ChessResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineSide {
    White,
    Black,
    Both,
    None,
}

impl EngineSide {
    fn plays(self, color: Color) -> bool {
        matches!(
            (self, color),
            (EngineSide::Both, _)
                | (EngineSide::White, Color::White)
                | (EngineSide::Black, Color::Black)
        )
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play chess in the terminal against a random-move engine", version)]
struct CmdArgs {
    /// Starting position in FEN
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Side played by the random engine
    #[arg(long, value_enum, default_value_t = EngineSide::Black)]
    engine: EngineSide,

    /// Seed for deterministic engine choices
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many half-moves
    #[arg(long, default_value_t = 400)]
    max_plies: usize,

    /// Print the game as PGN when it ends
    #[arg(long)]
    pgn: bool,
}

const HELP: &str = "commands: <from><to> (e.g. e2e4), moves <square>, fen, pgn, new, help, quit";

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = CmdArgs::parse();
    info!(?args, "starting ruleboard");

    let mut engine = match args.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    let mut game = ChessGame::from_fen(&args.fen)?;
    let (white, black) = player_names(args.engine, engine.name());

    println!("{}", render_game_state(game.state()));
    println!("{HELP}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut plies = 0usize;

    while plies < args.max_plies && !game.status().is_over() {
        if args.engine.plays(game.state().side_to_move()) {
            if game.play_engine_move(&mut engine)?.is_none() {
                break;
            }
            plies += 1;
            println!("{}", game.last_fragment().unwrap_or_default());
            if args.engine != EngineSide::Both {
                println!("{}", render_game_state(game.state()));
            }
            continue;
        }

        print!("{} to move> ", game.state().side_to_move().name());
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit"), _) => break,
            (Some("help"), _) => println!("{HELP}"),
            (Some("fen"), _) => println!("{}", game.fen()),
            (Some("pgn"), _) => print!("{}", game.to_pgn(&white, &black)),
            (Some("new"), _) => {
                game = ChessGame::from_fen(&args.fen)?;
                plies = 0;
                println!("{}", render_game_state(game.state()));
            }
            (Some("moves"), Some(square)) => match show_targets(&game, square) {
                Ok(text) => println!("{text}"),
                Err(err) => println!("{err}"),
            },
            (Some(text), None) => match parse_move(text) {
                Ok((origin, target)) => match game.move_piece(origin, target) {
                    Ok(_) => {
                        plies += 1;
                        println!("{}", render_game_state(game.state()));
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
            _ => println!("{HELP}"),
        }
    }

    println!("{}", render_game_state(game.state()));
    println!("{} ({})", game.status(), game.result());
    println!("{}", game.move_text());
    if args.pgn {
        print!("{}", game.to_pgn(&white, &black));
    }

    Ok(())
}

fn player_names(side: EngineSide, engine: &str) -> (String, String) {
    let name = |color| {
        if side.plays(color) {
            engine.to_owned()
        } else {
            "Human".to_owned()
        }
    };
    (name(Color::White), name(Color::Black))
}

fn parse_move(text: &str) -> ChessResult<(u8, u8)> {
    let origin = algebraic_to_square(text.get(0..2).unwrap_or(text))?;
    let target = algebraic_to_square(text.get(2..).unwrap_or_default())?;
    Ok((origin, target))
}

fn show_targets(game: &ChessGame, square: &str) -> ChessResult<String> {
    let origin = algebraic_to_square(square)?;
    let targets = game.legal_targets(origin)?;

    let mut board = BitBoard::EMPTY;
    let mut names = Vec::with_capacity(targets.len());
    for target in targets {
        board.set_bit(target)?;
        names.push(square_to_algebraic(target)?);
    }

    Ok(format!(
        "{}\n{}: {}",
        render_with_targets(game.state(), board),
        square,
        if names.is_empty() {
            "no legal moves".to_owned()
        } else {
            names.join(" ")
        }
    ))
}
