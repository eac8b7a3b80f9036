//! Crate root module declarations for the Ruleboard chess rules core.
//!
//! This file exposes the subsystems (game state, attack generation, legal
//! move generation, notation helpers, engines and the game session) under
//! stable module paths, and re-exports the small programmatic surface most
//! callers need.

pub mod chess_errors;

pub mod game_state {
    pub mod bitboard;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod ray_direction;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod chess_game;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::bitboard::BitBoard;
pub use game_state::board_state::BoardState;
pub use move_generation::game_status::{game_status, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::legal_targets;
pub use utils::fen_generator::generate_fen as format_position;
pub use utils::fen_parser::parse_fen as parse_position;
