//! Immutable board snapshot.
//!
//! `BoardState` stores the twelve real piece bitboards, turn and castling
//! flags, the en-passant target and both move counters. Snapshots are only
//! produced by the FEN parser, the starting-position constructor and the move
//! transition; each of those recomputes the occupancy caches before handing
//! the value out, so aggregates are never stale.

use crate::chess_errors::ChessResult;
use crate::game_state::bitboard::BitBoard;
use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    // Occupancy caches, recomputed together with every placement change.
    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) is_whites_turn: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: BitBoard,

    pub(crate) fifty_move_rule: u16,
    pub(crate) move_number: u16,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl BoardState {
    pub fn starting_position() -> Self {
        Self::from_parts(STARTING_PIECES, true, CASTLE_ALL, BitBoard::EMPTY, 0, 1)
    }

    pub(crate) fn from_parts(
        pieces: [[u64; 6]; 2],
        is_whites_turn: bool,
        castling_rights: CastlingRights,
        en_passant_square: BitBoard,
        fifty_move_rule: u16,
        move_number: u16,
    ) -> Self {
        let mut state = Self {
            pieces,
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            is_whites_turn,
            castling_rights,
            en_passant_square,
            fifty_move_rule,
            move_number,
        };
        state.recalc_occupancy();
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Copy of this snapshot with a different half-move clock.
    pub fn with_fifty_move_rule(&self, fifty_move_rule: u16) -> Self {
        Self {
            fifty_move_rule,
            ..self.clone()
        }
    }

    #[inline]
    pub fn is_whites_turn(&self) -> bool {
        self.is_whites_turn
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.is_whites_turn {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> BitBoard {
        self.en_passant_square
    }

    #[inline]
    pub fn fifty_move_rule(&self) -> u16 {
        self.fifty_move_rule
    }

    #[inline]
    pub fn move_number(&self) -> u16 {
        self.move_number
    }

    /// Bitboard for a real piece or an aggregate, labelled with `piece`.
    pub fn board(&self, piece: ColorPiece) -> BitBoard {
        let bits = match piece {
            ColorPiece::Single(color, kind) => self.pieces[color.index()][kind.index()],
            ColorPiece::WhitePieces => self.occupancy_by_color[Color::White.index()],
            ColorPiece::BlackPieces => self.occupancy_by_color[Color::Black.index()],
            ColorPiece::AllPieces => self.occupancy_all,
        };
        BitBoard::labeled(bits, piece)
    }

    #[inline]
    pub(crate) fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    /// The real piece standing on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        if square > 63 || self.occupancy_all & (1u64 << square) == 0 {
            return None;
        }
        let mask = 1u64 << square;
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some((color, kind));
                }
            }
        }
        None
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        BitBoard::new(self.pieces_of(color, PieceKind::King)).lowest_square()
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in Color::BOTH {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_matches_starting_fen() {
        let built = BoardState::starting_position();
        let parsed = BoardState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn aggregates_are_unions_of_real_boards() {
        let state = BoardState::starting_position();
        let white = ColorPiece::ALL
            .into_iter()
            .filter(|p| !p.is_aggregate() && p.color() == Some(Color::White))
            .fold(0u64, |acc, p| acc | state.board(p).bits());
        assert_eq!(state.board(ColorPiece::WhitePieces).bits(), white);
        assert_eq!(
            state.board(ColorPiece::AllPieces).bits(),
            state.occupancy(Color::White) | state.occupancy(Color::Black)
        );
        assert_eq!(
            state.board(ColorPiece::AllPieces).label(),
            Some(ColorPiece::AllPieces)
        );
    }

    #[test]
    fn piece_lookup_scans_real_boards() {
        let state = BoardState::starting_position();
        assert_eq!(state.piece_on(4), Some((Color::White, PieceKind::King)));
        assert_eq!(state.piece_on(59), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(state.piece_on(28), None);
        assert_eq!(state.piece_on(64), None);
        assert_eq!(state.king_square(Color::Black), Some(60));
    }

    #[test]
    fn with_fifty_move_rule_leaves_original_untouched() {
        let state = BoardState::starting_position();
        let later = state.with_fifty_move_rule(50);
        assert_eq!(state.fifty_move_rule(), 0);
        assert_eq!(later.fifty_move_rule(), 50);
        assert_eq!(later.board(ColorPiece::AllPieces), state.board(ColorPiece::AllPieces));
    }
}
