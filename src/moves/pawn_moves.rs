//! Set-wide pawn attack generation.
//!
//! Every pawn in the input board is shifted diagonally forward at once. The
//! edge files are masked off before the shift so no attack wraps onto the
//! opposite side of the board.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::chess_rules::{FILE_A, FILE_H};
use crate::game_state::chess_types::Color;

/// Squares attacked by all `pawns` of `color`.
#[inline]
pub fn pawn_attacks(pawns: BitBoard, color: Color) -> BitBoard {
    let bits = pawns.bits();
    let attacks = match color {
        Color::White => ((bits & !FILE_H) << 9) | ((bits & !FILE_A) << 7),
        Color::Black => ((bits & !FILE_H) >> 7) | ((bits & !FILE_A) >> 9),
    };
    BitBoard::new(attacks)
}

/// Single forward pushes onto empty squares.
#[inline]
pub fn pawn_single_pushes(pawns: BitBoard, color: Color, empty: BitBoard) -> BitBoard {
    let bits = pawns.bits();
    let pushed = match color {
        Color::White => bits << 8,
        Color::Black => bits >> 8,
    };
    BitBoard::new(pushed) & empty
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_single_pushes};
    use crate::game_state::bitboard::BitBoard;
    use crate::game_state::chess_types::Color;

    #[test]
    fn centre_pawn_attacks_two_squares() {
        let e4 = BitBoard::new(1u64 << 28);
        assert_eq!(pawn_attacks(e4, Color::White).serialize(), vec![35, 37]);
        assert_eq!(pawn_attacks(e4, Color::Black).serialize(), vec![19, 21]);
    }

    #[test]
    fn edge_pawns_do_not_wrap() {
        let a2_h2 = BitBoard::new((1u64 << 8) | (1u64 << 15));
        assert_eq!(pawn_attacks(a2_h2, Color::White).serialize(), vec![17, 22]);

        let a7_h7 = BitBoard::new((1u64 << 48) | (1u64 << 55));
        assert_eq!(pawn_attacks(a7_h7, Color::Black).serialize(), vec![41, 46]);
    }

    #[test]
    fn whole_rank_attacks_next_rank() {
        let rank_two = BitBoard::new(0xFF00);
        assert_eq!(pawn_attacks(rank_two, Color::White).bits(), 0xFF_0000);
    }

    #[test]
    fn pushes_stop_on_occupied_squares() {
        let pawns = BitBoard::new((1u64 << 12) | (1u64 << 13));
        let empty = !BitBoard::new(1u64 << 20);
        assert_eq!(pawn_single_pushes(pawns, Color::White, empty).serialize(), vec![21]);
    }
}
