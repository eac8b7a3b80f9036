use crate::game_state::bitboard::BitBoard;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::rank_of;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::{pawn_attacks, pawn_single_pushes};

/// Pseudo-legal targets of a `color` pawn standing on `origin`.
///
/// Captures land on enemy pieces, or on the en-passant square when `color`
/// is the side to move. The double push needs the start rank and an empty
/// intermediate square.
pub fn pawn_targets(state: &BoardState, origin: Square, color: Color) -> BitBoard {
    let pawn = BitBoard::new(1u64 << origin);
    let empty = !BitBoard::new(state.occupancy_all());

    let single = pawn_single_pushes(pawn, color, empty);
    let double = if rank_of(origin) == color.pawn_start_rank() {
        pawn_single_pushes(single, color, empty)
    } else {
        BitBoard::EMPTY
    };

    let mut capturable = BitBoard::new(state.occupancy(color.opposite()));
    if color == state.side_to_move() {
        capturable |= state.en_passant_square();
    }

    single | double | (pawn_attacks(pawn, color) & capturable)
}

#[cfg(test)]
mod tests {
    use super::pawn_targets;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let state = BoardState::starting_position();
        assert_eq!(pawn_targets(&state, 12, Color::White).serialize(), vec![20, 28]);
        assert_eq!(pawn_targets(&state, 52, Color::Black).serialize(), vec![36, 44]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let state = BoardState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(pawn_targets(&state, 12, Color::White).is_empty());

        let state = BoardState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(pawn_targets(&state, 12, Color::White).serialize(), vec![20]);
    }

    #[test]
    fn captures_include_en_passant_for_side_to_move() {
        let state =
            BoardState::from_fen("rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .expect("FEN should parse");
        assert_eq!(pawn_targets(&state, 36, Color::White).serialize(), vec![44, 45]);
    }

    #[test]
    fn en_passant_square_is_ignored_off_turn() {
        let mut state =
            BoardState::from_fen("rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .expect("FEN should parse");
        state.is_whites_turn = false;
        assert_eq!(pawn_targets(&state, 36, Color::White).serialize(), vec![44]);
    }
}
