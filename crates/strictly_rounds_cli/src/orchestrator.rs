//! Match orchestration between two controllers.

use crate::players::{Controller, MoveEntry};
use anyhow::{Context, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use strictly_rounds::{
    Coordinates, MatchEngine, MatchErrorKind, MatchPhase, MatchResult, MoveRejection, MoveSignal,
    PlayerId, Standings,
};
use tracing::{debug, info, instrument, warn};

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchReport {
    /// Final outcome, relative to the player who moved last.
    result: MatchResult,
    /// Name of the match winner, `None` on a draw.
    winner: Option<String>,
    /// Final standings.
    standings: Standings,
    /// Rounds actually played.
    rounds_played: u32,
    /// Rounds the match was configured for.
    round_count: u32,
}

/// Drives one match from its first move to its final outcome.
pub struct Orchestrator<W> {
    engine: MatchEngine,
    controllers: [Box<dyn Controller>; 2],
    out: W,
}

impl<W: Write + Send> Orchestrator<W> {
    /// Creates a new orchestrator for a configured engine.
    ///
    /// `one` and `two` control the engine's players one and two.
    pub fn new(
        engine: MatchEngine,
        one: Box<dyn Controller>,
        two: Box<dyn Controller>,
        out: W,
    ) -> Self {
        Self {
            engine,
            controllers: [one, two],
            out,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Consumes the orchestrator and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the match loop.
    #[instrument(skip(self), fields(rounds = self.engine.round_count()))]
    pub async fn run(&mut self) -> Result<MatchReport> {
        if self.engine.phase() != MatchPhase::RoundInProgress {
            anyhow::bail!("Match must be configured before it is run");
        }
        info!("Starting match orchestration");
        self.render_round_start()?;

        loop {
            let mover = self
                .engine
                .current_id()
                .context("Configured match has no current player")?;
            let controller = &mut self.controllers[mover.index()];

            if controller.is_automated() {
                writeln!(self.out, "{} is thinking...", controller.name())?;
            } else {
                writeln!(
                    self.out,
                    "{}, make your move (row col, or 1-9):",
                    controller.name()
                )?;
            }

            debug!(player = %controller.name(), "Waiting for move");
            let at = match controller.next_move(self.engine.board()).await? {
                MoveEntry::Move(at) => at,
                MoveEntry::Unreadable(text) => {
                    writeln!(
                        self.out,
                        "Could not read '{}' as a move. Type a row and column from 1 to 3, or a cell number 1-9.",
                        text.trim()
                    )?;
                    continue;
                }
            };

            let signal = match self.engine.submit_move(at) {
                Ok(signal) => signal,
                Err(err) if err.is_invalid_move() => {
                    warn!(%err, "Move rejected, prompting again");
                    writeln!(self.out, "{} Try again.", rejection_message(err.kind()))?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            writeln!(self.out, "{}\n", self.engine.board().display())?;

            match signal {
                MoveSignal::NextMove => {}
                MoveSignal::RoundWin(winner) => {
                    let name = self.player_name(winner)?;
                    writeln!(self.out, "Congrats {}! You won the round!", name)?;
                    self.advance_round(mover).await?;
                }
                MoveSignal::RoundDraw => {
                    writeln!(self.out, "The round was a draw!")?;
                    self.advance_round(mover).await?;
                }
                MoveSignal::MatchWin => {
                    let name = self.player_name(mover)?;
                    writeln!(self.out, "Awesome, {}! You won the game!", name)?;
                    return self.finish();
                }
                MoveSignal::MatchLoss => {
                    let name = self.player_name(mover)?;
                    writeln!(self.out, "Sorry {}, you lost the game...", name)?;
                    return self.finish();
                }
                MoveSignal::MatchDraw => {
                    writeln!(self.out, "The game was a draw! Unbelievable...")?;
                    return self.finish();
                }
            }
        }
    }

    async fn advance_round(&mut self, mover: PlayerId) -> Result<()> {
        self.render_standings()?;
        let controller = &mut self.controllers[mover.index()];
        if !controller.is_automated() {
            writeln!(
                self.out,
                "{}, press Enter to start the next round.",
                controller.name()
            )?;
        }
        controller.confirm_next_round().await?;
        self.engine.start_next_round()?;
        self.render_round_start()
    }

    fn finish(&mut self) -> Result<MatchReport> {
        self.render_standings()?;
        let result = self.engine.result().context("Match ended without a result")?;
        let winner = match result.winner() {
            Some(id) => Some(self.player_name(id)?),
            None => None,
        };
        let standings = self.engine.standings().context("Match has no players")?;
        info!(%result, ?winner, "Match finished");

        Ok(MatchReport {
            result,
            winner,
            standings,
            rounds_played: self.engine.round_index(),
            round_count: self.engine.round_count(),
        })
    }

    fn render_round_start(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\nRound {} / {}",
            self.engine.round_index(),
            self.engine.round_count()
        )?;
        self.render_standings()?;
        writeln!(self.out, "\n{}\n", self.engine.board().display())?;
        Ok(())
    }

    fn render_standings(&mut self) -> Result<()> {
        let standings = self.engine.standings().context("Match has no players")?;
        writeln!(self.out, "{}", standings.one())?;
        writeln!(self.out, "{}", standings.two())?;
        Ok(())
    }

    fn player_name(&self, id: PlayerId) -> Result<String> {
        self.engine
            .player(id)
            .map(|player| player.name().clone())
            .context("Match has no players")
    }
}

/// Row and column as the player typed them, counting from 1.
fn one_based(at: Coordinates) -> String {
    format!("row {}, column {}", at.row + 1, at.col + 1)
}

fn rejection_message(kind: MatchErrorKind) -> String {
    match kind {
        MatchErrorKind::InvalidMove(MoveRejection::CellOccupied(at)) => {
            format!("The cell at {} is already taken.", one_based(at))
        }
        MatchErrorKind::InvalidMove(MoveRejection::OutOfBounds(at)) => {
            format!("There is no cell at {}.", one_based(at))
        }
        other => format!("{}.", other),
    }
}
