//! Strictly Rounds terminal front-end
//!
//! Drives a [`strictly_rounds::MatchEngine`] from the terminal: humans type
//! moves on stdin, computers pick random free cells after a short pause, and
//! the board and standings are written after every move.
//!
//! # Architecture
//!
//! - **Config**: TOML match settings with command-line overrides
//! - **Players**: the [`Controller`] trait with human and computer controllers
//! - **Orchestrator**: the match loop, rendering and round advancement
//! - **Simulate**: batches of unattended computer-vs-computer matches
//!
//! # Example
//!
//! ```no_run
//! use strictly_rounds_cli::{simulate, MatchConfig, SimulationSummary};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = MatchConfig::load_or_default("strictly_rounds.toml")?;
//! let reports = simulate(&config, 10).await?;
//! println!("{}", SimulationSummary::from_reports(&reports));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
mod players;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, MatchConfig, ALLOWED_ROUNDS, MAX_NAME_LEN};

// Crate-level exports - Players
pub use players::{
    controller_for, parse_move, shared_input, spawn_line_reader, ComputerController, Controller,
    HumanController, MoveEntry, SharedInput,
};

// Crate-level exports - Orchestration
pub use orchestrator::{MatchReport, Orchestrator};
pub use simulate::{simulate, SimulationSummary};
