//! Errors used throughout the rules core.
//!
//! `ChessError` is the single error type returned by bitboard operations,
//! notation parsing, the move transition and the game session. Each variant
//! carries the offending input so callers can report it verbatim.
//!
//! Usage guidelines:
//! - `InvalidFormat` and `IllegalMove` are expected, user-facing failures.
//!   Callers should report them and let the user retry.
//! - `OutOfRange`, `NoPieceAtSquare` and `InvalidBoardValue` signal a caller
//!   bug (a bad square index or a transition from an empty square). They are
//!   still returned as values so nothing is silently ignored.

use thiserror::Error;

use crate::game_state::chess_types::{ColorPiece, Square};

/// Unified error type for the rules core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Position text could not be parsed.
    ///
    /// Payload: the full input and a short description of what was wrong.
    #[error("invalid position text '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A square index outside `0..=63` reached a bit operation.
    #[error("square index {square} is outside 0..=63")]
    OutOfRange { square: Square },

    /// The transition was asked to move a piece from an empty square.
    #[error("no piece on square {}", square_label(.square))]
    NoPieceAtSquare { square: Square },

    /// The origin/target pair is not in the legal move set.
    #[error("illegal move: {piece} cannot move from {} to {}", square_label(.origin), square_label(.target))]
    IllegalMove {
        piece: ColorPiece,
        origin: Square,
        target: Square,
    },

    /// A raw integer does not fit in a 64-bit board.
    #[error("value {value:#x} does not fit in a 64-bit board")]
    InvalidBoardValue { value: u128 },
}

/// Result alias used by every fallible operation in the crate.
pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ChessError::InvalidFormat {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

fn square_label(square: &Square) -> String {
    if *square < 64 {
        let file = char::from(b'a' + square % 8);
        let rank = char::from(b'1' + square / 8);
        format!("{file}{rank}")
    } else {
        square.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::{Color, ColorPiece, PieceKind};

    #[test]
    fn illegal_move_message_names_piece_and_squares() {
        let err = ChessError::IllegalMove {
            piece: ColorPiece::piece(Color::White, PieceKind::Pawn),
            origin: 12,
            target: 36,
        };
        assert_eq!(err.to_string(), "illegal move: white pawn cannot move from e2 to e5");
    }

    #[test]
    fn out_of_range_message_keeps_raw_index() {
        let err = ChessError::OutOfRange { square: 64 };
        assert_eq!(err.to_string(), "square index 64 is outside 0..=63");
    }
}
