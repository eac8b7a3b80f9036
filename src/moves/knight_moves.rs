//! Set-wide knight attack generation.
//!
//! Each of the eight jumps is a shift of the whole knight board with the
//! files and ranks that would wrap masked off first.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::chess_rules::{FILE_A, FILE_B, FILE_G, FILE_H, RANK_1, RANK_2, RANK_7, RANK_8};

/// Squares attacked by all `knights` in the input board.
pub fn knight_attacks(knights: BitBoard) -> BitBoard {
    let k = knights.bits();

    let north = ((k & !(RANK_7 | RANK_8 | FILE_H)) << 17)
        | ((k & !(RANK_8 | FILE_H | FILE_G)) << 10)
        | ((k & !(RANK_7 | RANK_8 | FILE_A)) << 15)
        | ((k & !(RANK_8 | FILE_A | FILE_B)) << 6);

    let south = ((k & !(RANK_1 | RANK_2 | FILE_H)) >> 15)
        | ((k & !(RANK_1 | FILE_G | FILE_H)) >> 6)
        | ((k & !(RANK_1 | RANK_2 | FILE_A)) >> 17)
        | ((k & !(RANK_1 | FILE_A | FILE_B)) >> 10);

    BitBoard::new(north | south)
}
