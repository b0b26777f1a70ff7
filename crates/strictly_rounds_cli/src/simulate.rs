//! Unattended computer-vs-computer matches.

use crate::config::MatchConfig;
use crate::orchestrator::{MatchReport, Orchestrator};
use crate::players::ComputerController;
use anyhow::Result;
use derive_getters::Getters;
use serde::Serialize;
use strictly_rounds::{MatchEngine, PlayerId, RandomMoveSource};
use tracing::{info, instrument};

/// Tally over a batch of simulated matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationSummary {
    /// Matches played.
    matches: u32,
    /// Matches won by player one.
    player_one_wins: u32,
    /// Matches won by player two.
    player_two_wins: u32,
    /// Drawn matches.
    draws: u32,
    /// Rounds played across all matches.
    rounds_played: u32,
}

impl SimulationSummary {
    /// Tallies a batch of reports.
    pub fn from_reports(reports: &[MatchReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.matches += 1;
            summary.rounds_played += report.rounds_played();
            match report.result().winner() {
                Some(PlayerId::One) => summary.player_one_wins += 1,
                Some(PlayerId::Two) => summary.player_two_wins += 1,
                None => summary.draws += 1,
            }
            summary
        })
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matches:          {}", self.matches)?;
        writeln!(f, "Player one wins:  {}", self.player_one_wins)?;
        writeln!(f, "Player two wins:  {}", self.player_two_wins)?;
        writeln!(f, "Draws:            {}", self.draws)?;
        write!(f, "Rounds played:    {}", self.rounds_played)
    }
}

/// Plays `matches` matches between two random computers.
///
/// Both players are forced to computer control with no delay. With a seed
/// in the configuration every match is reproducible.
#[instrument(skip(config))]
pub async fn simulate(config: &MatchConfig, matches: u32) -> Result<Vec<MatchReport>> {
    let config = config.clone().into_unattended();
    config.validate()?;

    let mut reports = Vec::with_capacity(matches as usize);
    for index in 0..matches {
        let engine = MatchEngine::start(
            config.player_one().clone(),
            config.player_two().clone(),
            *config.rounds(),
        )?
        .with_round_policy(*config.round_policy());

        let (source_one, source_two) = match config.seed() {
            Some(seed) => {
                let base = seed.wrapping_add(u64::from(index) * 2);
                (
                    RandomMoveSource::seeded(base),
                    RandomMoveSource::seeded(base.wrapping_add(1)),
                )
            }
            None => (RandomMoveSource::new(), RandomMoveSource::new()),
        };

        let delay = config.computer_move_delay();
        let mut orchestrator = Orchestrator::new(
            engine,
            Box::new(ComputerController::new(config.player_one().name(), source_one, delay)),
            Box::new(ComputerController::new(config.player_two().name(), source_two, delay)),
            std::io::sink(),
        );
        reports.push(orchestrator.run().await?);
    }

    info!(matches, "Simulation finished");
    Ok(reports)
}
