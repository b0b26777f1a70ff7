//! Moves, move signals and standings.
//!
//! A [`MoveSignal`] is what the engine hands back after every accepted move;
//! the caller decides what to show or ask for next based on it alone.

use crate::phases::MatchOutcome;
use crate::player::{Player, PlayerId};
use crate::types::{Coordinates, Sign};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move recorded in the current round's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player who moved.
    pub player: PlayerId,
    /// Where the mark went.
    pub at: Coordinates,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {} -> {}", self.player, self.at)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSignal {
    /// Round continues; the other player is now current.
    NextMove,
    /// The mover completed a line; more rounds remain.
    RoundWin(PlayerId),
    /// The board filled without a line; more rounds remain.
    RoundDraw,
    /// Match over, and the mover has more round wins.
    MatchWin,
    /// Match over, and the mover has fewer round wins.
    MatchLoss,
    /// Match over with equal round wins.
    MatchDraw,
}

impl MoveSignal {
    /// True if the move ended a round (including the final one).
    pub fn ends_round(self) -> bool {
        !matches!(self, MoveSignal::NextMove)
    }

    /// True if the move ended the match.
    pub fn ends_match(self) -> bool {
        self.match_outcome().is_some()
    }

    /// The relative match outcome carried by a final signal.
    pub fn match_outcome(self) -> Option<MatchOutcome> {
        match self {
            MoveSignal::MatchWin => Some(MatchOutcome::Win),
            MoveSignal::MatchLoss => Some(MatchOutcome::Loss),
            MoveSignal::MatchDraw => Some(MatchOutcome::Draw),
            _ => None,
        }
    }
}

impl From<MatchOutcome> for MoveSignal {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => MoveSignal::MatchWin,
            MatchOutcome::Loss => MoveSignal::MatchLoss,
            MatchOutcome::Draw => MoveSignal::MatchDraw,
        }
    }
}

/// One player's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Standing {
    /// Slot in the match.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Player's sign.
    sign: Sign,
    /// Rounds won so far.
    wins: u32,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            id: *player.id(),
            name: player.name().clone(),
            sign: *player.sign(),
            wins: *player.wins(),
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ( {} ): {}", self.name, self.sign, self.wins)
    }
}

/// Snapshot of both players' names, signs and win counts.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Standings {
    /// Player one.
    one: Standing,
    /// Player two.
    two: Standing,
}

impl Standings {
    pub(crate) fn new(players: &[Player; 2]) -> Self {
        Self {
            one: Standing::from(&players[0]),
            two: Standing::from(&players[1]),
        }
    }

    /// Standing for the given player.
    pub fn get(&self, id: PlayerId) -> &Standing {
        match id {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    /// Combined round wins of both players.
    pub fn total_wins(&self) -> u32 {
        self.one.wins + self.two.wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_classification() {
        assert!(!MoveSignal::NextMove.ends_round());
        assert!(MoveSignal::RoundDraw.ends_round());
        assert!(!MoveSignal::RoundWin(PlayerId::One).ends_match());
        assert!(MoveSignal::MatchLoss.ends_match());
        assert_eq!(MoveSignal::MatchDraw.match_outcome(), Some(MatchOutcome::Draw));
        assert_eq!(MoveSignal::from(MatchOutcome::Win), MoveSignal::MatchWin);
    }
}
