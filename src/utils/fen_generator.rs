use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(state: &BoardState) -> String {
    let board = generate_board_field(state);
    let side_to_move = if state.is_whites_turn() { "w" } else { "b" };
    let castling = generate_castling_field(state.castling_rights());
    let en_passant = state
        .en_passant_square()
        .single_square()
        .and_then(|square| square_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        state.fifty_move_rule(),
        state.move_number()
    )
}

fn generate_board_field(state: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let fen_char = state
                .piece_on(rank * 8 + file)
                .and_then(|(color, kind)| ColorPiece::piece(color, kind).fen_char());
            if let Some(ch) = fen_char {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();

    for (right, ch) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if castling_rights & right != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
