//! Human controller fed by lines of terminal input.

use super::{Controller, MoveEntry};
use anyhow::Result;
use std::io::BufRead;
use std::sync::Arc;
use strictly_rounds::{Board, Coordinates};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

/// Input lines shared by every human at the terminal.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Wraps a line receiver so several controllers can read from it.
pub fn shared_input(rx: mpsc::UnboundedReceiver<String>) -> SharedInput {
    Arc::new(Mutex::new(rx))
}

/// Forwards lines from `reader` on a dedicated thread.
///
/// The thread blocks on reads and is not joined, so a pending read never
/// keeps the process alive once the match is over.
pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> SharedInput {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Input reader finished");
    });
    shared_input(rx)
}

/// Parses a typed move.
///
/// Accepts `row col` or `row,col` with 1-based numbers, or a single keypad
/// digit `1`-`9`. Rows and columns beyond the board are passed through so
/// the engine can reject them.
pub fn parse_move(text: &str) -> Option<Coordinates> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [digit] => {
            let pos: usize = digit.parse().ok()?;
            Coordinates::from_index(pos.checked_sub(1)?)
        }
        [row, col] => {
            let row: usize = row.parse().ok()?;
            let col: usize = col.parse().ok()?;
            Some(Coordinates::new(row.checked_sub(1)?, col.checked_sub(1)?))
        }
        _ => None,
    }
}

/// Human player typing at the terminal.
pub struct HumanController {
    name: String,
    input: SharedInput,
}

impl HumanController {
    /// Creates a new human controller.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    async fn next_line(&self) -> Result<String> {
        self.input
            .lock()
            .await
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Input channel closed"))
    }
}

#[async_trait::async_trait]
impl Controller for HumanController {
    async fn next_move(&mut self, _board: &Board) -> Result<MoveEntry> {
        let line = self.next_line().await?;
        match parse_move(&line) {
            Some(at) => {
                debug!(player = %self.name, %at, "Move entered");
                Ok(MoveEntry::Move(at))
            }
            None => {
                warn!(player = %self.name, input = %line, "Unrecognised move");
                Ok(MoveEntry::Unreadable(line))
            }
        }
    }

    async fn confirm_next_round(&mut self) -> Result<()> {
        self.next_line().await?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        false
    }
}
