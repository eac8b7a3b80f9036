//! FEN-to-BoardState parser.
//!
//! Builds a complete snapshot from a Forsyth-Edwards Notation string:
//! piece bitboards, turn, castling rights, en-passant target and both
//! counters. Every failure is an `InvalidFormat` carrying the whole input.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::BitBoard;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::rank_of;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<BoardState> {
    let fail = |reason: String| ChessError::invalid_format(fen, reason);

    let parts: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts.as_slice()
    else {
        return Err(fail(format!("expected 6 fields, found {}", parts.len())));
    };

    let pieces = parse_board(board_part).map_err(&fail)?;
    let is_whites_turn = parse_side_to_move(side_part).map_err(&fail)?;
    let castling_rights = parse_castling_rights(castling_part).map_err(&fail)?;
    let en_passant_square =
        parse_en_passant_square(en_passant_part, &pieces, is_whites_turn).map_err(&fail)?;
    let fifty_move_rule = halfmove_part
        .parse::<u16>()
        .map_err(|_| fail(format!("invalid halfmove clock '{halfmove_part}'")))?;
    let move_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| fail(format!("invalid fullmove number '{fullmove_part}'")))?
        .max(1);

    Ok(BoardState::from_parts(
        pieces,
        is_whites_turn,
        castling_rights,
        en_passant_square,
        fifty_move_rule,
        move_number,
    ))
}

fn parse_board(board_part: &str) -> Result<[[u64; 6]; 2], String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("board layout must contain 8 ranks, found {}", ranks.len()));
    }

    let mut pieces = [[0u64; 6]; 2];
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                file += empty_count as usize;
                continue;
            }

            let Some(ColorPiece::Single(color, kind)) = ColorPiece::from_fen_char(ch) else {
                return Err(format!("invalid piece character '{ch}' in board layout"));
            };

            if file >= 8 {
                return Err(format!("rank {} has too many files", board_rank + 1));
            }

            pieces[color.index()][kind.index()] |= 1u64 << (board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank {} does not sum to 8 files", board_rank + 1));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> Result<bool, String> {
    match side_part {
        "w" => Ok(true),
        "b" => Ok(false),
        _ => Err(format!("invalid side-to-move field '{side_part}'")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("invalid castling rights character '{ch}'")),
        };
        if rights & right != 0 {
            return Err(format!("castling right '{ch}' listed twice"));
        }
        rights |= right;
    }

    Ok(rights)
}

/// The target must be empty and sit on the rank a pawn of the side not to
/// move has just skipped: rank 6 with White to move, rank 3 with Black.
fn parse_en_passant_square(
    en_passant_part: &str,
    pieces: &[[u64; 6]; 2],
    is_whites_turn: bool,
) -> Result<BitBoard, String> {
    if en_passant_part == "-" {
        return Ok(BitBoard::EMPTY);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| format!("invalid en-passant square '{en_passant_part}'"))?;

    let expected_rank = if is_whites_turn { 5 } else { 2 };
    if rank_of(square) != expected_rank {
        return Err(format!(
            "en-passant square '{en_passant_part}' is not on rank {}",
            expected_rank + 1
        ));
    }

    let occupied = pieces.iter().flatten().fold(0u64, |acc, board| acc | board);
    if occupied & (1u64 << square) != 0 {
        return Err(format!("en-passant square '{en_passant_part}' is occupied"));
    }

    Ok(BitBoard::new(1u64 << square))
}
