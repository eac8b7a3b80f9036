use crate::chess_errors::ChessResult;
use crate::game_state::bitboard::BitBoard;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::castling_lanes;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attacks_by_color;
use crate::moves::king_moves::king_attacks;
use crate::moves::ray_direction::{is_piece_in_path, path_between, Direction};

/// Pseudo-legal king targets: adjacent squares not held by own pieces and
/// not covered by the opponent, plus any castling destination on offer.
pub fn king_targets(state: &BoardState, origin: Square, color: Color) -> ChessResult<BitBoard> {
    let enemy_attacks = attacks_by_color(state, color.opposite());
    let own = BitBoard::new(state.occupancy(color));
    let steps = king_attacks(BitBoard::new(1u64 << origin)) & !own & !enemy_attacks;
    Ok(steps | castling_targets(state, color, enemy_attacks)?)
}

/// King destinations of every castle `color` may currently make.
///
/// A castle is offered when its right is still held, king and rook stand on
/// their home squares, nothing stands between them, and no square the king
/// occupies or crosses (destination included) is attacked.
pub fn castling_targets(
    state: &BoardState,
    color: Color,
    enemy_attacks: BitBoard,
) -> ChessResult<BitBoard> {
    let kings = BitBoard::new(state.pieces_of(color, PieceKind::King));
    let rooks = BitBoard::new(state.pieces_of(color, PieceKind::Rook));
    let occupancy = BitBoard::new(state.occupancy_all());

    let mut targets = BitBoard::EMPTY;
    for lane in castling_lanes(color) {
        if state.castling_rights() & lane.right == 0 {
            continue;
        }
        if !kings.contains(lane.king_from) || !rooks.contains(lane.rook_from) {
            continue;
        }
        if is_piece_in_path(lane.king_from, lane.rook_from, occupancy)? {
            continue;
        }

        let direction = if lane.king_to > lane.king_from {
            Direction::E
        } else {
            Direction::W
        };
        // Cannot castle out of, through or into check.
        let king_path = path_between(lane.king_from, lane.king_to, direction)?;
        if !(king_path & enemy_attacks).is_empty() {
            continue;
        }

        targets.set_bit(lane.king_to)?;
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::{castling_targets, king_targets};
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_checks::attacks_by_color;

    fn castles(fen: &str, color: Color) -> Vec<u8> {
        let state = BoardState::from_fen(fen).expect("FEN should parse");
        let enemy = attacks_by_color(&state, color.opposite());
        castling_targets(&state, color, enemy)
            .expect("castling lanes use board squares")
            .serialize()
    }

    #[test]
    fn both_sides_offered_on_open_back_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White), vec![2, 6]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::Black), vec![58, 62]);
    }

    #[test]
    fn missing_right_or_blocker_removes_the_castle() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1", Color::White), vec![6]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", Color::White), vec![6]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White).len(), 2);
    }

    #[test]
    fn attacked_crossing_square_blocks_castling() {
        // Black rook on f8 covers f1.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White), vec![2]);
        // Only b1 is attacked; the king never crosses it.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White), vec![2, 6]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White).is_empty());
    }

    #[test]
    fn displaced_rook_blocks_castling_even_with_right() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K1R1 w KQ - 0 1", Color::White), vec![2]);
    }

    #[test]
    fn king_steps_avoid_attacked_squares() {
        let state = BoardState::from_fen("r3k2r/8/8/8/8/4Q3/8/R3K2R b KQkq - 0 1")
            .expect("FEN should parse");
        let targets = king_targets(&state, 60, Color::Black).expect("e8 is on the board");
        assert_eq!(targets.serialize(), vec![51, 53, 59, 61]);
    }
}
