//! Board-state transition.
//!
//! `transition` is the only way a position advances. It clones the input and
//! returns the successor, so a candidate move can be simulated and thrown
//! away without touching the position it came from. `apply_move` is the
//! validated entry point that first checks the move against the legal set.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{check_square, BitBoard};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{
    castling_lane_for_target, castling_right_for_corner, chebyshev_distance, rank_of, CastlingLane,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_targets;

/// What a move does, read off the position before it is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFacts {
    pub color: Color,
    pub kind: PieceKind,
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
    pub castle: Option<&'static CastlingLane>,
    pub promotion: bool,
}

impl MoveFacts {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn piece(&self) -> ColorPiece {
        ColorPiece::piece(self.color, self.kind)
    }
}

/// Classifies the move `origin -> target` in `state` without playing it.
///
/// Fails with `NoPieceAtSquare` for an empty origin and with `IllegalMove`
/// when the target holds a piece of the mover's own colour.
pub fn describe_move(state: &BoardState, origin: Square, target: Square) -> ChessResult<MoveFacts> {
    check_square(origin)?;
    check_square(target)?;

    let (color, kind) = state
        .piece_on(origin)
        .ok_or(ChessError::NoPieceAtSquare { square: origin })?;

    let mut captured = match state.piece_on(target) {
        Some((occupant, _)) if occupant == color => {
            return Err(ChessError::IllegalMove {
                piece: ColorPiece::piece(color, kind),
                origin,
                target,
            });
        }
        Some((_, occupant_kind)) => Some(occupant_kind),
        None => None,
    };

    let en_passant = kind == PieceKind::Pawn
        && captured.is_none()
        && color == state.side_to_move()
        && state.en_passant_square().contains(target);
    if en_passant {
        captured = Some(PieceKind::Pawn);
    }

    let castle = if kind == PieceKind::King && chebyshev_distance(origin, target) > 1 {
        castling_lane_for_target(color, target)
    } else {
        None
    };

    Ok(MoveFacts {
        color,
        kind,
        captured,
        en_passant,
        castle,
        promotion: kind == PieceKind::Pawn && rank_of(target) == color.promotion_rank(),
    })
}

/// Successor position after moving the piece on `origin` to `target`.
///
/// The caller is responsible for `target` being a pseudo-legal destination;
/// nothing here checks piece movement rules. The input is never modified.
pub fn transition(state: &BoardState, origin: Square, target: Square) -> ChessResult<BoardState> {
    let facts = describe_move(state, origin, target)?;
    let color = facts.color;
    let enemy = color.opposite();
    let mut next = state.clone();

    if let Some(captured) = facts.captured {
        let capture_square = if facts.en_passant {
            behind(target, color)
        } else {
            target
        };
        next.pieces[enemy.index()][captured.index()] &= !(1u64 << capture_square);

        // Taking an unmoved rook revokes the owner's right on that wing.
        if captured == PieceKind::Rook {
            next.castling_rights &= !(castling_right_for_corner(target) & castling_rights_of(enemy));
        }
    }

    let placed = if facts.promotion {
        PieceKind::Queen
    } else {
        facts.kind
    };
    next.pieces[color.index()][facts.kind.index()] &= !(1u64 << origin);
    next.pieces[color.index()][placed.index()] |= 1u64 << target;

    match facts.kind {
        PieceKind::King => next.castling_rights &= !castling_rights_of(color),
        PieceKind::Rook => {
            next.castling_rights &= !(castling_right_for_corner(origin) & castling_rights_of(color));
        }
        _ => {}
    }

    if let Some(lane) = facts.castle {
        let rooks = &mut next.pieces[color.index()][PieceKind::Rook.index()];
        if *rooks & (1u64 << lane.rook_from) != 0 {
            *rooks &= !(1u64 << lane.rook_from);
            *rooks |= 1u64 << lane.rook_to;
        }
    }

    next.en_passant_square = if facts.kind == PieceKind::Pawn && origin.abs_diff(target) == 16 {
        BitBoard::new(1u64 << behind(target, color))
    } else {
        BitBoard::EMPTY
    };

    next.fifty_move_rule = if facts.kind == PieceKind::Pawn || facts.is_capture() {
        0
    } else {
        state.fifty_move_rule.saturating_add(1)
    };
    if !state.is_whites_turn {
        next.move_number = state.move_number.saturating_add(1);
    }
    next.is_whites_turn = !state.is_whites_turn;

    next.recalc_occupancy();
    Ok(next)
}

/// Validated move: the piece must belong to the side to move and `target`
/// must be one of its legal targets. On error the input is untouched.
pub fn apply_move(state: &BoardState, origin: Square, target: Square) -> ChessResult<BoardState> {
    check_square(origin)?;
    check_square(target)?;

    let (color, kind) = state
        .piece_on(origin)
        .ok_or(ChessError::NoPieceAtSquare { square: origin })?;
    let illegal = ChessError::IllegalMove {
        piece: ColorPiece::piece(color, kind),
        origin,
        target,
    };

    if color != state.side_to_move() {
        return Err(illegal);
    }
    if !legal_targets(state, origin)?.contains(&target) {
        return Err(illegal);
    }

    transition(state, origin, target)
}

/// The square one rank behind `square` from `color`'s point of view.
#[inline]
fn behind(square: Square, color: Color) -> Square {
    match color {
        Color::White => square - 8,
        Color::Black => square + 8,
    }
}
