//! Match configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_rounds::{ControlMode, PlayerDescriptor, RoundPolicy, Sign};
use tracing::{debug, info, instrument};

/// Round counts offered to players.
pub const ALLOWED_ROUNDS: [u32; 3] = [3, 5, 7];

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 18;

/// Configuration for one terminal match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// First player; starts the first round.
    #[serde(default = "default_player_one")]
    player_one: PlayerDescriptor,

    /// Second player.
    #[serde(default = "default_player_two")]
    player_two: PlayerDescriptor,

    /// Number of rounds in the match.
    #[serde(default = "default_rounds")]
    rounds: u32,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_computer_move_delay_ms")]
    computer_move_delay_ms: u64,

    /// Whether a decided match stops early.
    #[serde(default)]
    round_policy: RoundPolicy,

    /// Seed for computer players; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_player_one() -> PlayerDescriptor {
    PlayerDescriptor::new("Player", Sign::Cross, ControlMode::Human)
}

#[instrument]
fn default_player_two() -> PlayerDescriptor {
    PlayerDescriptor::new("Computer", Sign::Zero, ControlMode::Computer)
}

#[instrument]
fn default_rounds() -> u32 {
    3
}

#[instrument]
fn default_computer_move_delay_ms() -> u64 {
    1000
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            rounds: default_rounds(),
            computer_move_delay_ms: default_computer_move_delay_ms(),
            round_policy: RoundPolicy::default(),
            seed: None,
        }
    }
}

/// Values from the command line that replace configured ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replacement round count.
    pub rounds: Option<u32>,
    /// Replacement computer delay.
    pub computer_move_delay_ms: Option<u64>,
    /// Replacement seed.
    pub seed: Option<u64>,
    /// Replacement name for player one.
    pub player_one: Option<String>,
    /// Replacement name for player two.
    pub player_two: Option<String>,
    /// Make player one a computer.
    pub computer_one: bool,
    /// Make player two a computer.
    pub computer_two: bool,
    /// Play every round even when the match is decided.
    pub play_all_rounds: bool,
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one.name(),
            player_two = %config.player_two.name(),
            rounds = config.rounds,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file when it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(rounds) = overrides.rounds {
            self.rounds = rounds;
        }
        if let Some(delay) = overrides.computer_move_delay_ms {
            self.computer_move_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.play_all_rounds {
            self.round_policy = RoundPolicy::PlayAllRounds;
        }
        self.player_one = replace_player(
            &self.player_one,
            overrides.player_one,
            overrides.computer_one,
        );
        self.player_two = replace_player(
            &self.player_two,
            overrides.player_two,
            overrides.computer_two,
        );
    }

    /// Makes both players computers with no delay, as used by simulation.
    pub fn into_unattended(mut self) -> Self {
        self.player_one = replace_player(&self.player_one, None, true);
        self.player_two = replace_player(&self.player_two, None, true);
        self.computer_move_delay_ms = 0;
        self
    }

    /// Checks the choices the terminal offers.
    ///
    /// Empty names and clashing signs are left to the match engine.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ALLOWED_ROUNDS.contains(&self.rounds) {
            return Err(ConfigError::new(format!(
                "Rounds must be one of {:?}, got {}",
                ALLOWED_ROUNDS, self.rounds
            )));
        }
        for player in [&self.player_one, &self.player_two] {
            if player.name().chars().count() > MAX_NAME_LEN {
                return Err(ConfigError::new(format!(
                    "Player name '{}' is longer than {} characters",
                    player.name(),
                    MAX_NAME_LEN
                )));
            }
        }
        Ok(())
    }

    /// Pause before each computer move.
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }
}

fn replace_player(
    current: &PlayerDescriptor,
    name: Option<String>,
    computer: bool,
) -> PlayerDescriptor {
    let control = if computer {
        ControlMode::Computer
    } else {
        *current.control()
    };
    PlayerDescriptor::new(
        name.unwrap_or_else(|| current.name().clone()),
        *current.sign(),
        control,
    )
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
