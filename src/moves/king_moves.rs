//! Set-wide king attack generation.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::chess_rules::{FILE_A, FILE_H};

/// Squares adjacent to any king in the input board.
pub fn king_attacks(kings: BitBoard) -> BitBoard {
    let k = kings.bits();
    let sideways = ((k & !FILE_H) << 1) | ((k & !FILE_A) >> 1);
    let row = k | sideways;
    BitBoard::new(sideways | (row << 8) | (row >> 8))
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::bitboard::BitBoard;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(BitBoard::new(1)).serialize(), vec![1, 8, 9]);
    }

    #[test]
    fn centre_king_has_eight_targets() {
        let e4 = BitBoard::new(1u64 << 28);
        assert_eq!(
            king_attacks(e4).serialize(),
            vec![19, 20, 21, 27, 29, 35, 36, 37]
        );
    }

    #[test]
    fn h_file_king_does_not_wrap() {
        let h8 = BitBoard::new(1u64 << 63);
        assert_eq!(king_attacks(h8).serialize(), vec![54, 55, 62]);
    }
}
