//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every transition
//! of the [`MatchEngine`]. The engine asserts them in debug builds; they are
//! also usable on their own in tests.

use crate::engine::MatchEngine;
use crate::phases::MatchPhase;
use crate::types::Cell;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2)>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The round index stays within `1..=round_count` once configured.
pub struct RoundIndexInRange;

impl Invariant<MatchEngine> for RoundIndexInRange {
    fn holds(engine: &MatchEngine) -> bool {
        engine.phase() == MatchPhase::AwaitingSetup
            || (1..=engine.round_count()).contains(&engine.round_index())
    }

    fn description() -> &'static str {
        "Round index lies in 1..=round_count"
    }
}

/// Combined round wins never exceed the round index.
pub struct WinsWithinRounds;

impl Invariant<MatchEngine> for WinsWithinRounds {
    fn holds(engine: &MatchEngine) -> bool {
        engine
            .standings()
            .is_none_or(|standings| standings.total_wins() <= engine.round_index())
    }

    fn description() -> &'static str {
        "Sum of round wins is at most the round index"
    }
}

/// The round's move history alternates players and matches the board.
///
/// Each recorded move sits on a cell marked with the mover's sign, and the
/// number of marked cells equals the number of recorded moves.
pub struct HistoryMatchesBoard;

impl Invariant<MatchEngine> for HistoryMatchesBoard {
    fn holds(engine: &MatchEngine) -> bool {
        let history = engine.history();
        let board = engine.board();

        if history.len() != board.marked() {
            return false;
        }
        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        history.iter().all(|mv| {
            engine
                .player(mv.player)
                .is_some_and(|player| board.get(mv.at) == Some(Cell::Marked(*player.sign())))
        })
    }

    fn description() -> &'static str {
        "Move history alternates and agrees with the board"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (RoundIndexInRange, WinsWithinRounds, HistoryMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlMode, Coordinates, PlayerDescriptor, Sign};

    fn engine() -> MatchEngine {
        MatchEngine::start(
            PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
            PlayerDescriptor::new("Bob", Sign::Zero, ControlMode::Computer),
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_invariants_hold_before_setup() {
        assert!(MatchInvariants::check_all(&MatchEngine::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut engine = engine();
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            engine.submit_move(Coordinates::new(row, col)).unwrap();
        }
        assert!(MatchInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RoundIndexInRange, WinsWithinRounds);
        assert!(TwoInvariants::check_all(&engine()).is_ok());
    }

    struct NeverHolds;

    impl Invariant<MatchEngine> for NeverHolds {
        fn holds(_: &MatchEngine) -> bool {
            false
        }

        fn description() -> &'static str {
            "never holds"
        }
    }

    #[test]
    fn test_violations_are_collected() {
        type Mixed = (NeverHolds, RoundIndexInRange, NeverHolds);
        let violations = Mixed::check_all(&engine()).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, "never holds");
    }
}
