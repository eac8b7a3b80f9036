//! Attack coverage and check detection.
//!
//! Coverage is computed for a whole colour at once with the set-wide
//! generators; it answers "is this square attacked" without any notion of
//! move legality.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::sliding_attacks;

/// Every square attacked by at least one piece of `color`.
pub fn attacks_by_color(state: &BoardState, color: Color) -> BitBoard {
    let occupancy = BitBoard::new(state.occupancy_all());
    let board = |kind| BitBoard::new(state.pieces_of(color, kind));

    let mut attacks = pawn_attacks(board(PieceKind::Pawn), color);
    attacks |= knight_attacks(board(PieceKind::Knight));
    attacks |= king_attacks(board(PieceKind::King));
    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        attacks |= sliding_attacks(board(kind), kind, occupancy);
    }
    attacks
}

#[inline]
pub fn is_square_attacked(state: &BoardState, square: Square, attacker_color: Color) -> bool {
    square < 64 && attacks_by_color(state, attacker_color).contains(square)
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(state: &BoardState, color: Color) -> bool {
    let Some(king_sq) = state.king_square(color) else {
        return false;
    };
    is_square_attacked(state, king_sq, color.opposite())
}
