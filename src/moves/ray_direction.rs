//! Ray directions between squares and full-board line masks.
//!
//! Directions are classified with modular arithmetic on the rank-major square
//! difference instead of comparing rank/file coordinates. Line masks span the
//! whole board through a square and are the occupancy windows for the sliding
//! attack generator.

use crate::chess_errors::ChessResult;
use crate::game_state::bitboard::{check_square, BitBoard};
use crate::game_state::chess_rules::{chebyshev_distance, file_of, rank_of, FILE_A, RANK_1};
use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Change in square index for one step along the ray.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::N => 8,
            Direction::S => -8,
            Direction::E => 1,
            Direction::W => -1,
            Direction::NE => 9,
            Direction::NW => 7,
            Direction::SE => -7,
            Direction::SW => -9,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// Ray from `origin` towards `target`, or `None` for equal squares and
    /// knight-like offsets.
    ///
    /// Multiples of 8 are files, then multiples of 9 and 7 are diagonals, and
    /// only then is a same-rank test made. A difference of 7 along a rank
    /// (a-file to h-file) therefore classifies as a diagonal; `path_between`
    /// stops at the board edge in that case.
    pub fn classify(origin: Square, target: Square) -> ChessResult<Option<Direction>> {
        check_square(origin)?;
        check_square(target)?;

        let difference = i16::from(target) - i16::from(origin);
        let direction = if difference == 0 {
            None
        } else if difference % 8 == 0 {
            Some(if difference > 0 { Direction::N } else { Direction::S })
        } else if difference % 9 == 0 {
            Some(if difference > 0 { Direction::NE } else { Direction::SW })
        } else if difference % 7 == 0 {
            Some(if difference > 0 { Direction::NW } else { Direction::SE })
        } else if (RANK_1 << (8 * rank_of(origin))) & (1u64 << target) != 0 {
            Some(if difference > 0 { Direction::E } else { Direction::W })
        } else {
            None
        };

        Ok(direction)
    }
}

/// Squares from `origin` to `target` inclusive, walking `direction`.
///
/// The walk stops early at the board edge if `target` is not on the ray.
pub fn path_between(origin: Square, target: Square, direction: Direction) -> ChessResult<BitBoard> {
    check_square(origin)?;
    check_square(target)?;
    Ok(BitBoard::new(walk(origin, Some(target), direction)))
}

/// Squares strictly after `square` up to the board edge along `direction`.
pub fn ray_to_edge(square: Square, direction: Direction) -> BitBoard {
    BitBoard::new(walk(square, None, direction) & !(1u64 << square))
}

fn walk(origin: Square, target: Option<Square>, direction: Direction) -> u64 {
    let step = i16::from(direction.offset());
    let mut path = 1u64 << origin;
    let mut current = origin;

    while Some(current) != target {
        let next = i16::from(current) + step;
        if !(0..64).contains(&next) {
            break;
        }
        let next = next as Square;
        // A one-dimensional step that lands more than one file away wrapped around.
        if chebyshev_distance(current, next) > 1 {
            break;
        }
        path |= 1u64 << next;
        current = next;
    }

    path
}

/// True when any occupied square lies strictly between `origin` and `target`.
///
/// Squares that share no ray have nothing between them.
pub fn is_piece_in_path(origin: Square, target: Square, occupancy: BitBoard) -> ChessResult<bool> {
    let Some(direction) = Direction::classify(origin, target)? else {
        return Ok(false);
    };
    let endpoints = BitBoard::new((1u64 << origin) | (1u64 << target));
    let between = path_between(origin, target, direction)? & !endpoints;
    Ok(!(between & occupancy).is_empty())
}

/// Full-board line through `square` used as the sliding-attack window.
///
/// N/S give the file, E/W the rank, NE/SW the diagonal and NW/SE the
/// anti-diagonal. The square itself is part of every mask.
pub fn sliding_mask(square: Square, direction: Direction) -> BitBoard {
    match direction {
        Direction::N | Direction::S => BitBoard::new(FILE_A << file_of(square)),
        Direction::E | Direction::W => BitBoard::new(RANK_1 << (8 * rank_of(square))),
        diagonal => {
            ray_to_edge(square, diagonal)
                | ray_to_edge(square, diagonal.opposite())
                | BitBoard::new(1u64 << square)
        }
    }
}

/// One direction per line a slider moves along.
pub const fn slider_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &[Direction::NE, Direction::NW],
        PieceKind::Rook => &[Direction::N, Direction::E],
        PieceKind::Queen => &[Direction::N, Direction::E, Direction::NE, Direction::NW],
        _ => &[],
    }
}
