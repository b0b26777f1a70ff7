//! Strictly Rounds - multi-round tic-tac-toe match engine
//!
//! A synchronous, in-memory engine for a two-player tic-tac-toe match played
//! over a fixed number of rounds. Presentation (rendering, input, timing) is
//! left to the caller, which drives the engine through a small API and reacts
//! to the [`MoveSignal`] returned after every move.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with line and fullness checks (see [`rules`])
//! - **Player**: name, sign, control mode and round-win counter
//! - **MatchEngine**: round and turn sequencing, scoring and final outcome
//! - **MoveSource**: legal-move selection for computer players
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{
//!     ControlMode, MatchEngine, MoveSource, PlayerDescriptor, RandomMoveSource, Sign,
//! };
//!
//! # fn example() -> Result<(), strictly_rounds::MatchError> {
//! let mut engine = MatchEngine::start(
//!     PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Computer),
//!     PlayerDescriptor::new("Bob", Sign::Zero, ControlMode::Computer),
//!     3,
//! )?;
//! let mut source = RandomMoveSource::seeded(3);
//! while let Some(at) = source.choose_move(engine.board()) {
//!     let signal = engine.submit_move(at)?;
//!     if signal.ends_match() {
//!         break;
//!     }
//!     if signal.ends_round() {
//!         engine.start_next_round()?;
//!     }
//! }
//! assert!(engine.result().is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod move_source;
mod phases;
mod player;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board and cells
pub use types::{Board, Cell, Coordinates, Sign, BOARD_SIZE};

// Crate-level exports - Players
pub use player::{ControlMode, Player, PlayerDescriptor, PlayerId};

// Crate-level exports - Match engine
pub use action::{Move, MoveSignal, Standing, Standings};
pub use engine::MatchEngine;
pub use phases::{MatchOutcome, MatchPhase, MatchResult, RoundPolicy};

// Crate-level exports - Computer moves
pub use move_source::{MoveSource, RandomMoveSource};

// Crate-level exports - Errors
pub use error::{ConfigurationIssue, MatchError, MatchErrorKind, MoveRejection, StateViolation};
