//! Core value types shared by the bitboard rules core.
//!
//! Squares are rank-major indices (`a1 == 0`, `h1 == 7`, `h8 == 63`). Colour
//! and piece kind are kept separate so per-colour bitboards can live in a
//! `[color][piece_kind]` table.

use std::fmt;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Aggregate pseudo-piece holding every piece of this colour.
    #[inline]
    pub const fn group(self) -> ColorPiece {
        match self {
            Color::White => ColorPiece::WhitePieces,
            Color::Black => ColorPiece::BlackPieces,
        }
    }

    /// Rank index (`0..=7`) a pawn of this colour promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank index (`0..=7`) this colour's pawns start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Piece kind (colour is represented separately for table layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter.
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A coloured piece, or one of the three aggregate pseudo-pieces.
///
/// Aggregates are never stored; `BoardState` derives them from the twelve
/// real boards whenever they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPiece {
    Single(Color, PieceKind),
    AllPieces,
    WhitePieces,
    BlackPieces,
}

impl ColorPiece {
    /// Every real piece followed by the three aggregates.
    pub const ALL: [ColorPiece; 15] = [
        ColorPiece::Single(Color::White, PieceKind::Pawn),
        ColorPiece::Single(Color::White, PieceKind::Knight),
        ColorPiece::Single(Color::White, PieceKind::Bishop),
        ColorPiece::Single(Color::White, PieceKind::Rook),
        ColorPiece::Single(Color::White, PieceKind::Queen),
        ColorPiece::Single(Color::White, PieceKind::King),
        ColorPiece::Single(Color::Black, PieceKind::Pawn),
        ColorPiece::Single(Color::Black, PieceKind::Knight),
        ColorPiece::Single(Color::Black, PieceKind::Bishop),
        ColorPiece::Single(Color::Black, PieceKind::Rook),
        ColorPiece::Single(Color::Black, PieceKind::Queen),
        ColorPiece::Single(Color::Black, PieceKind::King),
        ColorPiece::AllPieces,
        ColorPiece::WhitePieces,
        ColorPiece::BlackPieces,
    ];

    #[inline]
    pub const fn piece(color: Color, kind: PieceKind) -> Self {
        ColorPiece::Single(color, kind)
    }

    /// Colour of a real piece or colour aggregate; `None` for `AllPieces`.
    pub const fn color(self) -> Option<Color> {
        match self {
            ColorPiece::Single(color, _) => Some(color),
            ColorPiece::WhitePieces => Some(Color::White),
            ColorPiece::BlackPieces => Some(Color::Black),
            ColorPiece::AllPieces => None,
        }
    }

    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            ColorPiece::Single(_, kind) => Some(kind),
            _ => None,
        }
    }

    pub const fn is_aggregate(self) -> bool {
        !matches!(self, ColorPiece::Single(..))
    }

    /// FEN letter, uppercase for white. Aggregates have none.
    pub fn fen_char(self) -> Option<char> {
        match self {
            ColorPiece::Single(Color::White, kind) => Some(kind.fen_char().to_ascii_uppercase()),
            ColorPiece::Single(Color::Black, kind) => Some(kind.fen_char()),
            _ => None,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| kind.fen_char() == ch.to_ascii_lowercase())?;
        Some(ColorPiece::Single(color, kind))
    }
}

impl fmt::Display for ColorPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorPiece::Single(color, kind) => write!(f, "{} {}", color.name(), kind.name()),
            ColorPiece::AllPieces => write!(f, "all pieces"),
            ColorPiece::WhitePieces => write!(f, "white pieces"),
            ColorPiece::BlackPieces => write!(f, "black pieces"),
        }
    }
}

/// Castling rights bitmask.
///
/// Layout: bit0 black kingside, bit1 black queenside, bit2 white kingside,
/// bit3 white queenside. FEN `K`, `Q`, `k`, `q` map to bits 2, 3, 0, 1.
pub type CastlingRights = u8;

pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0b1111;

/// Both castling rights of one colour.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_map_both_ways() {
        for piece in ColorPiece::ALL.into_iter().filter(|p| !p.is_aggregate()) {
            let ch = piece.fen_char().expect("real pieces have a FEN letter");
            assert_eq!(ColorPiece::from_fen_char(ch), Some(piece));
        }
        assert_eq!(ColorPiece::from_fen_char('x'), None);
        assert_eq!(ColorPiece::from_fen_char('3'), None);
        assert_eq!(ColorPiece::AllPieces.fen_char(), None);
    }

    #[test]
    fn aggregates_report_their_colour() {
        assert_eq!(Color::White.group(), ColorPiece::WhitePieces);
        assert_eq!(ColorPiece::BlackPieces.color(), Some(Color::Black));
        assert_eq!(ColorPiece::AllPieces.color(), None);
        assert!(ColorPiece::AllPieces.is_aggregate());
    }

    #[test]
    fn castling_rights_per_colour_are_disjoint() {
        assert_eq!(castling_rights_of(Color::White), 0b1100);
        assert_eq!(castling_rights_of(Color::Black), 0b0011);
        assert_eq!(
            castling_rights_of(Color::White) | castling_rights_of(Color::Black),
            CASTLE_ALL
        );
    }
}
