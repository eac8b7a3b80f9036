//! Occupancy-aware attacks for bishops, rooks and queens.
//!
//! Each line through a slider (file, rank, diagonal, anti-diagonal) is
//! resolved with the subtraction trick: subtracting twice the slider bit
//! from the masked occupancy flips every square up to and including the
//! first blocker above the slider. Rotating the board by 180 degrees turns
//! the opposite ray into an upward ray, so one subtraction per half-line is
//! enough and no per-square ray tables are needed.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::ray_direction::{slider_directions, sliding_mask};

/// Squares attacked by every slider in `sliders` moving like `kind`.
///
/// `occupancy` holds all blockers; the first blocker on each ray is included
/// in the result whatever its colour. Non-slider kinds attack nothing.
pub fn sliding_attacks(sliders: BitBoard, kind: PieceKind, occupancy: BitBoard) -> BitBoard {
    let mut attacks = BitBoard::EMPTY;
    for square in sliders.squares() {
        for &direction in slider_directions(kind) {
            attacks |= line_attacks(square, sliding_mask(square, direction), occupancy);
        }
    }
    attacks
}

fn line_attacks(square: Square, mask: BitBoard, occupancy: BitBoard) -> BitBoard {
    let slider = BitBoard::new(1u64 << square);
    let line = (occupancy | slider) & mask;

    let upward = line.bits().wrapping_sub(slider.bits() << 1);
    let downward = line
        .mirror()
        .bits()
        .wrapping_sub(slider.mirror().bits() << 1);
    let downward = BitBoard::new(downward).mirror();

    (BitBoard::new(upward) ^ downward) & mask
}
