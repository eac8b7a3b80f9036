//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the piece bitboards for the
//! interactive binary, tests, and diagnostics in text environments.

use crate::game_state::bitboard::BitBoard;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_game_state(state: &BoardState) -> String {
    render_with_targets(state, BitBoard::EMPTY)
}

/// Like `render_game_state`, with empty squares in `targets` drawn as `•`
/// and occupied ones as `×`.
pub fn render_with_targets(state: &BoardState, targets: BitBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let sq = rank * 8 + file;
            let ch = match (state.piece_on(sq), targets.contains(sq)) {
                (Some(_), true) => '×',
                (Some((color, kind)), false) => piece_to_unicode(color, kind),
                (None, true) => '•',
                (None, false) => '·',
            };
            out.push(ch);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, render_with_targets};
    use crate::game_state::bitboard::BitBoard;
    use crate::game_state::board_state::BoardState;

    #[test]
    fn starting_board_has_labels_and_pieces() {
        let rendered = render_game_state(&BoardState::starting_position());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn targets_are_marked() {
        let targets = BitBoard::new((1u64 << 20) | (1u64 << 28));
        let rendered = render_with_targets(&BoardState::starting_position(), targets);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[5], "4 · · · · • · · · 4");
        assert_eq!(lines[6], "3 · · · · • · · · 3");
    }
}
