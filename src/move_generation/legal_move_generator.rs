//! Legal move generation.
//!
//! Pseudo-legal targets are dispatched by piece kind, then every candidate
//! is played through the transition and kept only if the mover's king is not
//! attacked afterwards. There is no pin detection; the simulation alone
//! decides legality.

use crate::chess_errors::ChessResult;
use crate::game_state::bitboard::{check_square, BitBoard};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::transition;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::king_targets;
use crate::move_generation::legal_moves_pawn::pawn_targets;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::sliding_moves::sliding_attacks;

/// Pseudo-legal targets for the piece on `origin`; empty for an empty square.
pub fn pseudo_legal_targets(state: &BoardState, origin: Square) -> ChessResult<BitBoard> {
    Ok(pseudo_legal_for_piece(state, origin)?.map_or(BitBoard::EMPTY, |(_, targets)| targets))
}

fn pseudo_legal_for_piece(
    state: &BoardState,
    origin: Square,
) -> ChessResult<Option<(Color, BitBoard)>> {
    check_square(origin)?;
    let Some((color, kind)) = state.piece_on(origin) else {
        return Ok(None);
    };

    let piece = BitBoard::new(1u64 << origin);
    let own = BitBoard::new(state.occupancy(color));
    let occupancy = BitBoard::new(state.occupancy_all());

    let targets = match kind {
        PieceKind::Pawn => pawn_targets(state, origin, color),
        PieceKind::Knight => knight_attacks(piece) & !own,
        PieceKind::King => king_targets(state, origin, color)?,
        slider if slider.is_slider() => sliding_attacks(piece, slider, occupancy) & !own,
        _ => BitBoard::EMPTY,
    };

    Ok(Some((color, targets)))
}

/// Legal targets of the piece on `origin`, ascending.
///
/// Works for a piece of either colour; the piece is treated as the mover.
/// An empty square has no targets.
pub fn legal_targets(state: &BoardState, origin: Square) -> ChessResult<Vec<Square>> {
    let Some((color, candidates)) = pseudo_legal_for_piece(state, origin)? else {
        return Ok(Vec::new());
    };

    let mut legal = Vec::with_capacity(candidates.count() as usize);
    for target in candidates.squares() {
        let next = transition(state, origin, target)?;
        if !is_king_in_check(&next, color) {
            legal.push(target);
        }
    }
    Ok(legal)
}

/// Every legal `(origin, target)` pair for the side to move.
pub fn legal_moves(state: &BoardState) -> ChessResult<Vec<(Square, Square)>> {
    let own = BitBoard::new(state.occupancy(state.side_to_move()));
    let mut moves = Vec::with_capacity(64);
    for origin in own.squares() {
        for target in legal_targets(state, origin)? {
            moves.push((origin, target));
        }
    }
    Ok(moves)
}

/// True as soon as any piece of the side to move has a legal target.
pub fn has_legal_move(state: &BoardState) -> ChessResult<bool> {
    let own = BitBoard::new(state.occupancy(state.side_to_move()));
    for origin in own.squares() {
        if !legal_targets(state, origin)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessError;

    fn state(fen: &str) -> BoardState {
        BoardState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let start = BoardState::starting_position();
        assert_eq!(legal_targets(&start, 12), Ok(vec![20, 28]));
        assert_eq!(legal_targets(&start, 6), Ok(vec![21, 23]));
        assert_eq!(legal_targets(&start, 3), Ok(vec![]));
        assert_eq!(legal_moves(&start).map(|moves| moves.len()), Ok(20));
    }

    #[test]
    fn empty_and_invalid_squares() {
        let start = BoardState::starting_position();
        assert_eq!(legal_targets(&start, 27), Ok(vec![]));
        assert_eq!(legal_targets(&start, 64), Err(ChessError::OutOfRange { square: 64 }));
    }

    #[test]
    fn off_turn_pieces_report_their_targets() {
        let start = BoardState::starting_position();
        assert_eq!(legal_targets(&start, 52), Ok(vec![36, 44]));
        assert_eq!(legal_targets(&start, 57), Ok(vec![40, 42]));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let pinned = state("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
        assert_eq!(legal_targets(&pinned, 12), Ok(vec![]));

        let pinned_rook = state("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
        assert_eq!(
            legal_targets(&pinned_rook, 12),
            Ok(vec![20, 28, 36, 44, 52])
        );
    }

    #[test]
    fn pseudo_legal_targets_ignore_pins() {
        let pinned = state("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
        assert_eq!(
            pseudo_legal_targets(&pinned, 12).map(BitBoard::serialize),
            Ok(vec![3, 5, 19, 21, 26, 30, 33, 39, 40])
        );
        assert_eq!(pseudo_legal_targets(&pinned, 27), Ok(BitBoard::EMPTY));
        assert_eq!(
            pseudo_legal_targets(&pinned, 52).map(BitBoard::count),
            Ok(12)
        );
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        let checked = state("r3k2r/8/8/8/8/4Q3/8/R3K2R b KQkq - 0 1");
        assert_eq!(legal_targets(&checked, 60), Ok(vec![51, 53, 59, 61]));
        // Rooks cannot block on the e-file from a8 or h8.
        assert_eq!(legal_targets(&checked, 56), Ok(vec![]));
        assert_eq!(legal_moves(&checked).map(|moves| moves.len()), Ok(4));
    }

    #[test]
    fn king_cannot_step_along_a_checking_ray() {
        let checked = state("8/8/8/8/8/8/8/r3K2k w - - 0 1");
        assert_eq!(legal_targets(&checked, 4), Ok(vec![11, 12, 13]));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        let exposed = state("8/8/8/KPp4r/8/8/8/7k w - c6 0 2");
        assert_eq!(legal_targets(&exposed, 33), Ok(vec![41]));
    }

    #[test]
    fn checkmated_king_has_no_targets() {
        let mated = state("r1bk1Qnr/p1pp2pp/np6/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQ - 0 4");
        assert_eq!(legal_targets(&mated, 59), Ok(vec![]));
        assert_eq!(has_legal_move(&mated), Ok(false));
    }
}
