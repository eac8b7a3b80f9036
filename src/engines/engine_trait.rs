//! Engine abstraction used by the game session and the terminal binary.
//!
//! An engine only picks a move; the session validates and applies it like
//! any other move.

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Square;

pub trait Engine {
    fn name(&self) -> &str;

    /// Picks an `(origin, target)` pair for the side to move, or `None` when
    /// there is no legal move.
    fn choose_move(&mut self, state: &BoardState) -> ChessResult<Option<(Square, Square)>>;
}
