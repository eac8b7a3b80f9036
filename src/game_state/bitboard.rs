//! 64-bit occupancy set with mirroring helpers.
//!
//! Bit `i` set means square `i` is occupied. The optional label records which
//! piece board a value came from; it is bookkeeping only and never affects
//! the bit arithmetic. Bitwise operators drop the label.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{ColorPiece, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitBoard {
    bits: u64,
    label: Option<ColorPiece>,
}

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard::new(0);

    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self { bits, label: None }
    }

    #[inline]
    pub const fn labeled(bits: u64, label: ColorPiece) -> Self {
        Self {
            bits,
            label: Some(label),
        }
    }

    /// One-hot board for `square`.
    pub fn from_square(square: Square) -> ChessResult<Self> {
        check_square(square)?;
        Ok(Self::new(1u64 << square))
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    pub const fn label(self) -> Option<ColorPiece> {
        self.label
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn set_bit(&mut self, square: Square) -> ChessResult<()> {
        check_square(square)?;
        self.bits |= 1u64 << square;
        Ok(())
    }

    pub fn clear_bit(&mut self, square: Square) -> ChessResult<()> {
        check_square(square)?;
        self.bits &= !(1u64 << square);
        Ok(())
    }

    pub fn test_bit(self, square: Square) -> ChessResult<bool> {
        check_square(square)?;
        Ok(self.bits & (1u64 << square) != 0)
    }

    /// Unchecked membership test for indices already known to be on the board.
    #[inline]
    pub(crate) const fn contains(self, square: Square) -> bool {
        self.bits & (1u64 << square) != 0
    }

    /// Lowest set square, if any.
    #[inline]
    pub fn lowest_square(self) -> Option<Square> {
        (self.bits != 0).then(|| self.bits.trailing_zeros() as Square)
    }

    /// The square of a one-hot board; `None` when zero or several bits are set.
    pub fn single_square(self) -> Option<Square> {
        if self.bits.count_ones() == 1 {
            self.lowest_square()
        } else {
            None
        }
    }

    /// Iterates set squares in ascending order.
    #[inline]
    pub fn squares(self) -> SquareIter {
        SquareIter { remaining: self.bits }
    }

    /// Set squares in ascending order.
    pub fn serialize(self) -> Vec<Square> {
        self.squares().collect()
    }

    /// Swaps the rank bytes: rank 1 <-> rank 8, rank 2 <-> rank 7, ...
    #[inline]
    pub const fn mirror_vertical(self) -> Self {
        Self {
            bits: self.bits.swap_bytes(),
            label: self.label,
        }
    }

    /// Reverses the bit order inside every rank byte: file a <-> file h.
    pub fn mirror_horizontal(self) -> Self {
        let bytes = self.bits.to_le_bytes().map(reverse_bits);
        Self {
            bits: u64::from_le_bytes(bytes),
            label: self.label,
        }
    }

    /// 180 degree rotation (vertical then horizontal mirror).
    #[inline]
    pub fn mirror(self) -> Self {
        self.mirror_vertical().mirror_horizontal()
    }
}

/// Reverses the bit order of one byte with the nibble / pair / bit swap.
#[inline]
pub const fn reverse_bits(byte: u8) -> u8 {
    let byte = (byte & 0xF0) >> 4 | (byte & 0x0F) << 4;
    let byte = (byte & 0xCC) >> 2 | (byte & 0x33) << 2;
    (byte & 0xAA) >> 1 | (byte & 0x55) << 1
}

#[inline]
pub(crate) fn check_square(square: Square) -> ChessResult<()> {
    if square < 64 {
        Ok(())
    } else {
        Err(ChessError::OutOfRange { square })
    }
}

/// Iterator over set squares; each step clears the lowest set bit.
#[derive(Debug, Clone)]
pub struct SquareIter {
    remaining: u64,
}

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining ^= lowest;
        Some(lowest.trailing_zeros() as Square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl From<u64> for BitBoard {
    fn from(bits: u64) -> Self {
        Self::new(bits)
    }
}

impl TryFrom<u128> for BitBoard {
    type Error = ChessError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::new)
            .map_err(|_| ChessError::InvalidBoardValue { value })
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard::new(self.bits | rhs.bits)
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: BitBoard) {
        *self = *self | rhs;
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard::new(self.bits & rhs.bits)
    }
}

impl BitAndAssign for BitBoard {
    fn bitand_assign(&mut self, rhs: BitBoard) {
        *self = *self & rhs;
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;
    fn bitxor(self, rhs: BitBoard) -> BitBoard {
        BitBoard::new(self.bits ^ rhs.bits)
    }
}

impl Not for BitBoard {
    type Output = BitBoard;
    fn not(self) -> BitBoard {
        BitBoard::new(!self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::{reverse_bits, BitBoard};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, ColorPiece, PieceKind};

    #[test]
    fn set_and_clear_bits() {
        let mut board = BitBoard::EMPTY;
        board.set_bit(0).expect("a1 is on the board");
        board.set_bit(63).expect("h8 is on the board");
        assert_eq!(board.bits(), 1 | (1u64 << 63));

        board.clear_bit(0).expect("a1 is on the board");
        assert_eq!(board.bits(), 1u64 << 63);
        assert_eq!(board.test_bit(63), Ok(true));
        assert_eq!(board.test_bit(0), Ok(false));
    }

    #[test]
    fn out_of_range_squares_are_rejected() {
        let mut board = BitBoard::EMPTY;
        assert_eq!(board.set_bit(64), Err(ChessError::OutOfRange { square: 64 }));
        assert_eq!(board.clear_bit(200), Err(ChessError::OutOfRange { square: 200 }));
        assert_eq!(board.test_bit(64), Err(ChessError::OutOfRange { square: 64 }));
        assert!(BitBoard::from_square(99).is_err());
    }

    #[test]
    fn oversized_values_are_rejected() {
        assert_eq!(
            BitBoard::try_from(u128::from(u64::MAX)).map(BitBoard::bits),
            Ok(u64::MAX)
        );
        assert_eq!(
            BitBoard::try_from(1u128 << 64),
            Err(ChessError::InvalidBoardValue { value: 1u128 << 64 })
        );
    }

    #[test]
    fn serialize_lists_set_squares_ascending() {
        let board = BitBoard::new((1u64 << 63) | (1u64 << 12) | (1u64 << 28) | 1);
        assert_eq!(board.serialize(), vec![0, 12, 28, 63]);
        assert!(BitBoard::EMPTY.serialize().is_empty());
        assert_eq!(BitBoard::new(u64::MAX).serialize().len(), 64);
    }

    #[test]
    fn single_square_requires_exactly_one_bit() {
        assert_eq!(BitBoard::new(1u64 << 45).single_square(), Some(45));
        assert_eq!(BitBoard::EMPTY.single_square(), None);
        assert_eq!(BitBoard::new(0b11).single_square(), None);
    }

    #[test]
    fn vertical_mirror_swaps_ranks() {
        let rank_one = BitBoard::new(0xFF);
        assert_eq!(rank_one.mirror_vertical().bits(), 0xFF00_0000_0000_0000);

        let e2 = BitBoard::new(1u64 << 12);
        assert_eq!(e2.mirror_vertical().bits(), 1u64 << 52);
    }

    #[test]
    fn horizontal_mirror_swaps_files() {
        let a_file = BitBoard::new(0x0101_0101_0101_0101);
        assert_eq!(a_file.mirror_horizontal().bits(), 0x8080_8080_8080_8080);

        let b1 = BitBoard::new(1u64 << 1);
        assert_eq!(b1.mirror_horizontal().bits(), 1u64 << 6);
    }

    #[test]
    fn full_mirror_is_bit_reversal() {
        for bits in [1u64, 0x8000_0000_0000_0001, 0x0000_0010_0800_0000, 0x1234_5678_9ABC_DEF0] {
            assert_eq!(BitBoard::new(bits).mirror().bits(), bits.reverse_bits());
            assert_eq!(BitBoard::new(bits).mirror().mirror().bits(), bits);
        }
    }

    #[test]
    fn reverse_bits_swaps_each_position() {
        assert_eq!(reverse_bits(0b0000_0001), 0b1000_0000);
        assert_eq!(reverse_bits(0b1100_1010), 0b0101_0011);
        assert_eq!(reverse_bits(0xFF), 0xFF);
    }

    #[test]
    fn operators_drop_the_label() {
        let pawns = BitBoard::labeled(0xFF00, ColorPiece::piece(Color::White, PieceKind::Pawn));
        assert!(pawns.label().is_some());
        assert_eq!((pawns | BitBoard::new(1)).label(), None);
        assert_eq!((pawns & BitBoard::new(0x0F00)).bits(), 0x0F00);
        assert_eq!((!pawns).bits(), !0xFF00u64);
        assert_eq!(pawns.mirror_vertical().label(), pawns.label());
    }
}
