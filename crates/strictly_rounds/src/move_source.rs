//! Move selection for computer-controlled players.

use crate::types::{Board, Coordinates};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Produces a legal move for the given board.
pub trait MoveSource {
    /// Picks an empty cell, `None` when the board is full.
    fn choose_move(&mut self, board: &Board) -> Option<Coordinates>;
}

/// Picks uniformly at random among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoveSource {
    #[instrument(skip_all)]
    fn choose_move(&mut self, board: &Board) -> Option<Coordinates> {
        let choice = board.empty_cells().choose(&mut self.rng).copied();
        debug!(?choice, "Random move chosen");
        choice
    }
}
