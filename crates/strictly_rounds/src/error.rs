//! Error types for the match engine.

use crate::player::PlayerId;
use crate::types::{Coordinates, Sign};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a match configuration was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigurationIssue {
    /// A player name was empty (or only whitespace).
    #[display("player {} has an empty name", _0)]
    EmptyName(PlayerId),
    /// The round count was zero.
    #[display("round count must be at least 1")]
    ZeroRounds,
    /// Both players chose the same sign.
    #[display("both players use sign {}", _0)]
    IdenticalSigns(Sign),
}

/// Why a submitted move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// Coordinates fall outside the 3x3 grid.
    #[display("coordinates {} are off the board", _0)]
    OutOfBounds(Coordinates),
    /// The target cell already carries a mark.
    #[display("cell {} is already marked", _0)]
    CellOccupied(Coordinates),
    /// No round is currently being played.
    #[display("no round is in progress")]
    NoRoundInProgress,
}

/// Which phase requirement an operation violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StateViolation {
    /// The engine has not been configured yet.
    #[display("match has not been configured")]
    NotConfigured,
    /// The current round has not been resolved yet.
    #[display("current round is still in progress")]
    RoundInProgress,
    /// The match already has a final outcome.
    #[display("match is already resolved")]
    MatchResolved,
}

/// Category of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MatchErrorKind {
    /// Setup parameters were rejected.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(ConfigurationIssue),
    /// A move was rejected; nothing changed.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveRejection),
    /// An operation was called in the wrong phase.
    #[display("Illegal state: {}", _0)]
    IllegalState(StateViolation),
}

/// Match engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Match error: {} at {}:{}", kind, file, line)]
pub struct MatchError {
    /// What went wrong.
    pub kind: MatchErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MatchError {
    /// Creates a new match error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: MatchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> MatchErrorKind {
        self.kind
    }

    /// True if the error is an [`MatchErrorKind::InvalidMove`].
    pub fn is_invalid_move(&self) -> bool {
        matches!(self.kind, MatchErrorKind::InvalidMove(_))
    }
}

impl From<ConfigurationIssue> for MatchError {
    #[track_caller]
    fn from(issue: ConfigurationIssue) -> Self {
        Self::new(MatchErrorKind::InvalidConfiguration(issue))
    }
}

impl From<MoveRejection> for MatchError {
    #[track_caller]
    fn from(rejection: MoveRejection) -> Self {
        Self::new(MatchErrorKind::InvalidMove(rejection))
    }
}

impl From<StateViolation> for MatchError {
    #[track_caller]
    fn from(violation: StateViolation) -> Self {
        Self::new(MatchErrorKind::IllegalState(violation))
    }
}
