//! Canonical chess-rule constants.
//!
//! Starting position, edge masks used by the shift-based attack generators,
//! and the fixed castling geometry.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_B: u64 = FILE_A << 1;
pub const FILE_G: u64 = FILE_A << 6;
pub const FILE_H: u64 = FILE_A << 7;

pub const RANK_1: u64 = 0xFF;
pub const RANK_2: u64 = RANK_1 << 8;
pub const RANK_7: u64 = RANK_1 << 48;
pub const RANK_8: u64 = RANK_1 << 56;

/// Piece placement of the starting position, `[color][piece_kind]`.
pub const STARTING_PIECES: [[u64; 6]; 2] = [
    [
        RANK_2,
        (1 << 1) | (1 << 6),
        (1 << 2) | (1 << 5),
        (1 << 0) | (1 << 7),
        1 << 3,
        1 << 4,
    ],
    [
        RANK_7,
        (1 << 57) | (1 << 62),
        (1 << 58) | (1 << 61),
        (1 << 56) | (1 << 63),
        1 << 59,
        1 << 60,
    ],
];

/// Geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
    },
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
    },
];

pub fn castling_lanes(color: Color) -> impl Iterator<Item = &'static CastlingLane> {
    CASTLING_LANES.iter().filter(move |lane| lane.color == color)
}

/// Lane whose king destination is `king_to`.
pub fn castling_lane_for_target(color: Color, king_to: Square) -> Option<&'static CastlingLane> {
    castling_lanes(color).find(|lane| lane.king_to == king_to)
}

/// The right tied to a rook corner (a1, h1, a8, h8); zero elsewhere.
#[inline]
pub const fn castling_right_for_corner(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// King-step distance between two squares.
#[inline]
pub const fn chebyshev_distance(a: Square, b: Square) -> u8 {
    let df = file_of(a).abs_diff(file_of(b));
    let dr = rank_of(a).abs_diff(rank_of(b));
    if df > dr {
        df
    } else {
        dr
    }
}
