//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations used by the FEN and move-text adapters.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{check_square, BitBoard};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::invalid_format(square, "a square is a file letter and a rank digit"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::invalid_format(
            square,
            format!("invalid file '{}'", file as char),
        ));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::invalid_format(
            square,
            format!("invalid rank '{}'", rank as char),
        ));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<BitBoard> {
    BitBoard::from_square(algebraic_to_square(square)?)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    check_square(square)?;

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}
