//! Game-status classification.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

const LIGHT_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    Draw50Move,
    DrawInsufficientMaterial,
    /// Only reported by a game session, which keeps the position history.
    DrawRepetition,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::Draw50Move
                | GameStatus::DrawInsufficientMaterial
                | GameStatus::DrawRepetition
        )
    }

    /// PGN result token once the game is over, given the side that is to
    /// move in the final position.
    pub const fn result_token(self, side_to_move: Color) -> &'static str {
        match self {
            GameStatus::Ongoing => "*",
            GameStatus::Checkmate => match side_to_move {
                Color::White => "0-1",
                Color::Black => "1-0",
            },
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw50Move => "draw by the fifty-move rule",
            GameStatus::DrawInsufficientMaterial => "draw by insufficient material",
            GameStatus::DrawRepetition => "draw by threefold repetition",
        };
        f.write_str(text)
    }
}

/// Classifies `state` from the position alone.
///
/// Checked in order: checkmate, stalemate, fifty-move rule, insufficient
/// material. Repetition needs the game history and is never returned here.
pub fn game_status(state: &BoardState) -> ChessResult<GameStatus> {
    if !has_legal_move(state)? {
        return Ok(if is_king_in_check(state, state.side_to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        });
    }

    if state.fifty_move_rule() >= 50 {
        return Ok(GameStatus::Draw50Move);
    }

    if is_insufficient_material(state) {
        return Ok(GameStatus::DrawInsufficientMaterial);
    }

    Ok(GameStatus::Ongoing)
}

/// Bare kings, a single minor piece, or one bishop each on the same colour.
pub fn is_insufficient_material(state: &BoardState) -> bool {
    let both = |kind| state.pieces_of(Color::White, kind) | state.pieces_of(Color::Black, kind);

    if both(PieceKind::Pawn) | both(PieceKind::Rook) | both(PieceKind::Queen) != 0 {
        return false;
    }

    let knights = both(PieceKind::Knight);
    let bishops = both(PieceKind::Bishop);
    if (knights | bishops).count_ones() <= 1 {
        return true;
    }

    let white_bishops = state.pieces_of(Color::White, PieceKind::Bishop);
    let black_bishops = state.pieces_of(Color::Black, PieceKind::Bishop);
    knights == 0
        && white_bishops.count_ones() == 1
        && black_bishops.count_ones() == 1
        && ((bishops & LIGHT_SQUARES) == 0 || (bishops & !LIGHT_SQUARES) == 0)
}
