//! Move-path enumeration (perft) with per-leaf move statistics.

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::{describe_move, transition};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts the leaves of the legal move tree `depth` plies below `state`.
///
/// Move statistics describe the last move leading to each leaf.
pub fn perft(state: &BoardState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (origin, target) in legal_moves(state)? {
        let next = transition(state, origin, target)?;

        if depth > 1 {
            total.merge(perft(&next, depth - 1)?);
            continue;
        }

        let facts = describe_move(state, origin, target)?;
        total.nodes += 1;
        if facts.is_capture() {
            total.captures += 1;
        }
        if facts.en_passant {
            total.en_passant += 1;
        }
        if facts.castle.is_some() {
            total.castles += 1;
        }
        if facts.promotion {
            total.promotions += 1;
        }
        if is_king_in_check(&next, next.side_to_move()) {
            total.checks += 1;
            if !has_legal_move(&next)? {
                total.checkmates += 1;
            }
        }
    }

    Ok(total)
}
