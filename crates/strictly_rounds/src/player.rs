//! Players and their setup descriptors.

use crate::types::Sign;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player slot in a match. `One` always starts the first round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum PlayerId {
    /// The first configured player.
    #[strum(to_string = "1")]
    One,
    /// The second configured player.
    #[strum(to_string = "2")]
    Two,
}

impl PlayerId {
    /// Returns the other slot.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Array index for this slot.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Who decides a player's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ControlMode {
    /// Moves come from a person.
    #[default]
    Human,
    /// Moves come from a [`MoveSource`](crate::MoveSource).
    Computer,
}

/// Setup record for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerDescriptor {
    /// Display name.
    #[new(into)]
    name: String,
    /// Sign this player marks cells with.
    sign: Sign,
    /// Human or computer.
    #[serde(default)]
    control: ControlMode,
}

/// A player for the lifetime of one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Slot in the match.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Sign this player marks cells with.
    sign: Sign,
    /// Human or computer.
    control: ControlMode,
    /// Rounds won so far.
    wins: u32,
}

impl Player {
    /// Creates a player from its descriptor with zero wins.
    #[instrument(skip(descriptor), fields(name = %descriptor.name))]
    pub fn new(id: PlayerId, descriptor: PlayerDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name,
            sign: descriptor.sign,
            control: descriptor.control,
            wins: 0,
        }
    }

    /// Records one more round win.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn add_win(&mut self) {
        self.wins += 1;
        debug!(wins = self.wins, "Round win recorded");
    }

    /// True if this player's moves come from a move source.
    pub fn is_computer(&self) -> bool {
        self.control == ControlMode::Computer
    }
}
