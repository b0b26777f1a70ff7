//! Computer controller backed by a move source.

use super::{Controller, MoveEntry};
use anyhow::Result;
use std::time::Duration;
use strictly_rounds::{Board, MoveSource};
use tracing::debug;

/// Computer player that pauses before acting.
pub struct ComputerController<S> {
    name: String,
    source: S,
    delay: Duration,
}

impl<S: MoveSource + Send> ComputerController<S> {
    /// Creates a new computer controller.
    pub fn new(name: impl Into<String>, source: S, delay: Duration) -> Self {
        Self {
            name: name.into(),
            source,
            delay,
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait::async_trait]
impl<S: MoveSource + Send> Controller for ComputerController<S> {
    async fn next_move(&mut self, board: &Board) -> Result<MoveEntry> {
        debug!(player = %self.name, "Computer making move");
        pause(self.delay).await;

        self.source
            .choose_move(board)
            .map(MoveEntry::Move)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
    }

    async fn confirm_next_round(&mut self) -> Result<()> {
        pause(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}
