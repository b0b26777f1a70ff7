//! Match phases, round policy and outcomes.

use crate::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Where the match engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MatchPhase {
    /// No players configured yet.
    AwaitingSetup,
    /// A round is being played and accepts moves.
    RoundInProgress,
    /// A round ended and more rounds remain; waiting for the next round to start.
    RoundResolved,
    /// The match has a final outcome.
    MatchResolved,
}

/// When a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPolicy {
    /// Stop as soon as the trailing player can no longer catch up.
    #[default]
    FinishWhenDecided,
    /// Always play every configured round.
    PlayAllRounds,
}

/// Final outcome, relative to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MatchOutcome {
    /// The perspective player has more round wins.
    Win,
    /// The opponent has more round wins.
    Loss,
    /// Both have the same number of round wins.
    Draw,
}

/// Final outcome together with the player it is reported for.
///
/// The perspective is the player who made the last move of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Outcome from the perspective player's point of view.
    pub outcome: MatchOutcome,
    /// Player who made the final move.
    pub perspective: PlayerId,
}

impl MatchResult {
    /// Maps the relative outcome to the absolute winner, `None` on a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            MatchOutcome::Win => Some(self.perspective),
            MatchOutcome::Loss => Some(self.perspective.opponent()),
            MatchOutcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Draw)
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(winner) => write!(f, "Player {} wins the match", winner),
            None => write!(f, "Match drawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_mapping() {
        let result = MatchResult {
            outcome: MatchOutcome::Loss,
            perspective: PlayerId::Two,
        };
        assert_eq!(result.winner(), Some(PlayerId::One));
        assert_eq!(result.to_string(), "Player 1 wins the match");

        let result = MatchResult {
            outcome: MatchOutcome::Win,
            perspective: PlayerId::Two,
        };
        assert_eq!(result.winner(), Some(PlayerId::Two));

        let result = MatchResult {
            outcome: MatchOutcome::Draw,
            perspective: PlayerId::One,
        };
        assert!(result.is_draw());
        assert_eq!(result.winner(), None);
    }
}
