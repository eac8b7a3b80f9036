//! A single game in progress.
//!
//! `ChessGame` owns the current position together with everything derived
//! from the game's history: the move-text record and how often each
//! position has occurred. Callers hold one value per game instead of
//! sharing a global slot. Every rejected move leaves the game unchanged.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_targets;
use crate::utils::pgn::{join_move_text, move_fragment, write_pgn};

const REPETITION_LIMIT: u8 = 3;

#[derive(Debug, Clone)]
pub struct ChessGame {
    initial: BoardState,
    current: BoardState,
    fragments: Vec<String>,
    occurrences: HashMap<String, u8>,
    status: GameStatus,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::from_state(BoardState::starting_position(), GameStatus::Ongoing)
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let state = BoardState::from_fen(fen)?;
        let status = game_status(&state)?;
        Ok(Self::from_state(state, status))
    }

    fn from_state(state: BoardState, status: GameStatus) -> Self {
        let mut occurrences = HashMap::new();
        occurrences.insert(repetition_key(&state), 1);

        Self {
            initial: state.clone(),
            current: state,
            fragments: Vec::new(),
            occurrences,
            status,
        }
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.current
    }

    #[inline]
    pub fn initial_state(&self) -> &BoardState {
        &self.initial
    }

    pub fn fen(&self) -> String {
        self.current.get_fen()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn legal_targets(&self, origin: Square) -> ChessResult<Vec<Square>> {
        legal_targets(&self.current, origin)
    }

    /// Plays `origin -> target` for the side to move and returns the new
    /// status. Moves after the game has ended are illegal.
    pub fn move_piece(&mut self, origin: Square, target: Square) -> ChessResult<GameStatus> {
        let result = self.try_move(origin, target);
        if let Err(err) = &result {
            warn!(origin, target, %err, "move rejected");
        }
        result
    }

    fn try_move(&mut self, origin: Square, target: Square) -> ChessResult<GameStatus> {
        if self.status.is_over() {
            let (color, kind) = self
                .current
                .piece_on(origin)
                .ok_or(ChessError::NoPieceAtSquare { square: origin })?;
            return Err(ChessError::IllegalMove {
                piece: ColorPiece::piece(color, kind),
                origin,
                target,
            });
        }

        let next = apply_move(&self.current, origin, target)?;

        let key = repetition_key(&next);
        let seen = self.occurrences.get(&key).copied().unwrap_or(0) + 1;
        let mut status = game_status(&next)?;
        if status == GameStatus::Ongoing && seen >= REPETITION_LIMIT {
            status = GameStatus::DrawRepetition;
        }

        let fragment = move_fragment(
            &self.current,
            origin,
            target,
            &next,
            status,
            self.fragments.is_empty(),
        )?;

        debug!(fen = %next.get_fen(), %fragment, "move applied");
        if status.is_over() {
            info!(%status, result = status.result_token(next.side_to_move()), "game over");
        }

        self.occurrences.insert(key, seen);
        self.fragments.push(fragment);
        self.current = next;
        self.status = status;
        Ok(status)
    }

    /// Lets `engine` move for the side to move. `Ok(None)` when the game is
    /// already over or the engine finds no move.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Option<GameStatus>> {
        if self.status.is_over() {
            return Ok(None);
        }
        let Some((origin, target)) = engine.choose_move(&self.current)? else {
            return Ok(None);
        };
        debug!(engine = engine.name(), origin, target, "engine move");
        self.move_piece(origin, target).map(Some)
    }

    pub fn move_text(&self) -> String {
        join_move_text(&self.fragments)
    }

    pub fn last_fragment(&self) -> Option<&str> {
        self.fragments.last().map(String::as_str)
    }

    /// Result token for the current status.
    pub fn result(&self) -> &'static str {
        self.status.result_token(self.current.side_to_move())
    }

    pub fn to_pgn(&self, white: &str, black: &str) -> String {
        write_pgn(&self.initial, &self.move_text(), self.result(), white, black)
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Placement, side, castling and en passant: the FEN fields that make two
/// positions the same for repetition.
fn repetition_key(state: &BoardState) -> String {
    state
        .get_fen()
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}
