//! Controller trait and implementations.

mod computer;
mod human;

pub use computer::ComputerController;
pub use human::{parse_move, shared_input, spawn_line_reader, HumanController, SharedInput};

use anyhow::Result;
use std::time::Duration;
use strictly_rounds::{Board, ControlMode, Coordinates, PlayerDescriptor, RandomMoveSource};
use tracing::{debug, instrument};

/// What a controller produced when asked for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveEntry {
    /// A move to submit; the engine may still reject it.
    Move(Coordinates),
    /// Input that could not be read as a move.
    Unreadable(String),
}

/// Decides moves for one player.
#[async_trait::async_trait]
pub trait Controller: Send {
    /// Gets the next move for the given board.
    async fn next_move(&mut self, board: &Board) -> Result<MoveEntry>;

    /// Waits until this player is ready for the next round.
    async fn confirm_next_round(&mut self) -> Result<()>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True if no person is behind this controller.
    fn is_automated(&self) -> bool;
}

/// Builds the controller a descriptor asks for.
///
/// Human controllers read from `input`; computer controllers use `seed`
/// when given and entropy otherwise.
#[instrument(skip(descriptor, input), fields(name = %descriptor.name()))]
pub fn controller_for(
    descriptor: &PlayerDescriptor,
    input: &SharedInput,
    delay: Duration,
    seed: Option<u64>,
) -> Box<dyn Controller> {
    debug!(control = %descriptor.control(), "Building controller");
    match descriptor.control() {
        ControlMode::Human => Box::new(HumanController::new(descriptor.name(), input.clone())),
        ControlMode::Computer => {
            let source = seed.map_or_else(RandomMoveSource::new, RandomMoveSource::seeded);
            Box::new(ComputerController::new(descriptor.name(), source, delay))
        }
    }
}
