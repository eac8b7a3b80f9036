//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. A fixed seed
//! replays the same choices for the same positions.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Ruleboard Random"
    }

    fn choose_move(&mut self, state: &BoardState) -> ChessResult<Option<(Square, Square)>> {
        let moves = legal_moves(state)?;
        let picked = moves.as_slice().choose(&mut self.rng).copied();
        debug!(candidates = moves.len(), ?picked, "random engine chose a move");
        Ok(picked)
    }
}
