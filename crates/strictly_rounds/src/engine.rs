//! The match engine: rounds, turns and outcomes.

use crate::action::{Move, MoveSignal, Standings};
use crate::error::{ConfigurationIssue, MatchError, MoveRejection, StateViolation};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::phases::{MatchOutcome, MatchPhase, MatchResult, RoundPolicy};
use crate::player::{Player, PlayerDescriptor, PlayerId};
use crate::types::{Board, Coordinates};
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

/// Multi-round tic-tac-toe match.
///
/// Owns the board and both players. Every state change goes through
/// [`configure`](Self::configure), [`submit_move`](Self::submit_move) or
/// [`start_next_round`](Self::start_next_round); everything else is a query.
///
/// ```
/// use strictly_rounds::{ControlMode, Coordinates, MatchEngine, MoveSignal, PlayerDescriptor, Sign};
///
/// let mut engine = MatchEngine::new();
/// engine.configure(
///     PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
///     PlayerDescriptor::new("Bob", Sign::Zero, ControlMode::Computer),
///     3,
/// )?;
/// assert_eq!(engine.submit_move(Coordinates::new(1, 1))?, MoveSignal::NextMove);
/// assert_eq!(engine.current_player().map(|p| p.name().as_str()), Some("Bob"));
/// # Ok::<(), strictly_rounds::MatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatchEngine {
    board: Board,
    players: Option<[Player; 2]>,
    current: PlayerId,
    round_count: u32,
    round_index: u32,
    phase: MatchPhase,
    policy: RoundPolicy,
    history: Vec<Move>,
    result: Option<MatchResult>,
}

impl MatchEngine {
    /// Creates an engine awaiting setup.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: PlayerId::One,
            round_count: 0,
            round_index: 0,
            phase: MatchPhase::AwaitingSetup,
            policy: RoundPolicy::default(),
            history: Vec::new(),
            result: None,
        }
    }

    /// Creates and configures an engine in one step.
    #[instrument(skip(one, two))]
    pub fn start(
        one: PlayerDescriptor,
        two: PlayerDescriptor,
        round_count: u32,
    ) -> Result<Self, MatchError> {
        let mut engine = Self::new();
        engine.configure(one, two, round_count)?;
        Ok(engine)
    }

    /// Sets when the match ends. Applies to the current and later configurations.
    pub fn with_round_policy(mut self, policy: RoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets up a fresh match.
    ///
    /// Player one moves first. Win counts start from zero even when the
    /// engine was configured before. On error nothing changes.
    #[instrument(skip(self, one, two), fields(player_one = %one.name(), player_two = %two.name()))]
    pub fn configure(
        &mut self,
        one: PlayerDescriptor,
        two: PlayerDescriptor,
        round_count: u32,
    ) -> Result<(), MatchError> {
        for (id, descriptor) in [(PlayerId::One, &one), (PlayerId::Two, &two)] {
            if descriptor.name().trim().is_empty() {
                warn!(player = %id, "Rejecting empty player name");
                return Err(ConfigurationIssue::EmptyName(id).into());
            }
        }
        if round_count == 0 {
            warn!("Rejecting zero round count");
            return Err(ConfigurationIssue::ZeroRounds.into());
        }
        if one.sign() == two.sign() {
            warn!(sign = %one.sign(), "Rejecting identical signs");
            return Err(ConfigurationIssue::IdenticalSigns(*one.sign()).into());
        }

        self.players = Some([
            Player::new(PlayerId::One, one),
            Player::new(PlayerId::Two, two),
        ]);
        self.round_count = round_count;
        self.round_index = 1;
        self.current = PlayerId::One;
        self.board.reset();
        self.history.clear();
        self.result = None;
        self.phase = MatchPhase::RoundInProgress;

        info!(round_count, policy = ?self.policy, "Match configured");
        self.assert_invariants();
        Ok(())
    }

    /// Plays the current player's mark at `at`.
    ///
    /// The engine checks the phase, the bounds and that the cell is empty
    /// before touching anything, so a rejected move leaves the board and the
    /// turn unchanged.
    #[instrument(skip(self), fields(round = self.round_index, player = %self.current))]
    pub fn submit_move(&mut self, at: Coordinates) -> Result<MoveSignal, MatchError> {
        if self.phase != MatchPhase::RoundInProgress {
            warn!(phase = %self.phase, "Move submitted outside a round");
            return Err(MoveRejection::NoRoundInProgress.into());
        }
        if !at.in_bounds() {
            warn!(%at, "Move off the board");
            return Err(MoveRejection::OutOfBounds(at).into());
        }
        if !self.board.is_empty(at) {
            warn!(%at, "Move onto a marked cell");
            return Err(MoveRejection::CellOccupied(at).into());
        }

        let mover = self.current;
        let sign = *self.player_ref(mover)?.sign();
        self.board.place(sign, at)?;
        self.history.push(Move::new(mover, at));
        debug!(%at, %sign, "Mark placed");

        // Line before fullness: a board-filling win is still a win.
        let signal = if self.board.has_line(sign) {
            self.player_mut(mover)?.add_win();
            info!(winner = %mover, "Round won");
            self.resolve_round(MoveSignal::RoundWin(mover))
        } else if self.board.is_full() {
            info!("Round drawn");
            self.resolve_round(MoveSignal::RoundDraw)
        } else {
            self.current = mover.opponent();
            MoveSignal::NextMove
        };

        self.assert_invariants();
        Ok(signal)
    }

    /// Clears the board for the next round.
    ///
    /// The round index was already advanced by the move that ended the
    /// previous round. The current player stays as it was.
    #[instrument(skip(self), fields(round = self.round_index))]
    pub fn start_next_round(&mut self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::AwaitingSetup => Err(StateViolation::NotConfigured.into()),
            MatchPhase::RoundInProgress => Err(StateViolation::RoundInProgress.into()),
            MatchPhase::MatchResolved => Err(StateViolation::MatchResolved.into()),
            MatchPhase::RoundResolved => {
                self.board.reset();
                self.history.clear();
                self.phase = MatchPhase::RoundInProgress;
                info!(starting = %self.current, "Next round started");
                self.assert_invariants();
                Ok(())
            }
        }
    }

    /// The player whose turn it is, `None` before setup.
    pub fn current_player(&self) -> Option<&Player> {
        self.players
            .as_ref()
            .map(|players| &players[self.current.index()])
    }

    /// Slot of the current player, `None` before setup.
    pub fn current_id(&self) -> Option<PlayerId> {
        self.players.as_ref().map(|_| self.current)
    }

    /// Player in the given slot, `None` before setup.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[id.index()])
    }

    /// Names, signs and win counts of both players, `None` before setup.
    pub fn standings(&self) -> Option<Standings> {
        self.players.as_ref().map(Standings::new)
    }

    /// One-based index of the round being played (or next to be played).
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    /// Configured number of rounds.
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// When the match ends.
    pub fn round_policy(&self) -> RoundPolicy {
        self.policy
    }

    /// The board of the current (or just finished) round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves of the current (or just finished) round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Final result, once the match is resolved.
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    fn player_ref(&self, id: PlayerId) -> Result<&Player, MatchError> {
        self.player(id)
            .ok_or_else(|| StateViolation::NotConfigured.into())
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, MatchError> {
        self.players
            .as_mut()
            .map(|players| &mut players[id.index()])
            .ok_or_else(|| StateViolation::NotConfigured.into())
    }

    fn wins(&self) -> [u32; 2] {
        self.players
            .as_ref()
            .map_or([0, 0], |[one, two]| [*one.wins(), *two.wins()])
    }

    /// True once no further round can change the result.
    fn is_decided(&self) -> bool {
        if self.round_index >= self.round_count {
            return true;
        }
        match self.policy {
            RoundPolicy::PlayAllRounds => false,
            RoundPolicy::FinishWhenDecided => {
                let remaining = self.round_count - self.round_index;
                let [one, two] = self.wins();
                one.max(two) > one.min(two) + remaining
            }
        }
    }

    fn resolve_round(&mut self, round_signal: MoveSignal) -> MoveSignal {
        if !self.is_decided() {
            self.round_index += 1;
            self.phase = MatchPhase::RoundResolved;
            debug!(next_round = self.round_index, "Waiting for next round");
            return round_signal;
        }

        // Reported from the point of view of whoever made the last move.
        let [one, two] = self.wins();
        let (mine, theirs) = match self.current {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let outcome = match mine.cmp(&theirs) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Less => MatchOutcome::Loss,
            Ordering::Equal => MatchOutcome::Draw,
        };
        let result = MatchResult {
            outcome,
            perspective: self.current,
        };
        self.result = Some(result);
        self.phase = MatchPhase::MatchResolved;
        info!(%result, rounds_played = self.round_index, "Match resolved");
        outcome.into()
    }

    fn assert_invariants(&self) {
        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "Match invariants violated: {:?}",
            MatchInvariants::check_all(self)
        );
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ControlMode;
    use crate::types::Sign;

    fn engine(rounds: u32) -> MatchEngine {
        MatchEngine::start(
            PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
            PlayerDescriptor::new("Bob", Sign::Zero, ControlMode::Human),
            rounds,
        )
        .unwrap()
    }

    fn play(engine: &mut MatchEngine, cells: &[(usize, usize)]) -> MoveSignal {
        let mut last = MoveSignal::NextMove;
        for &(row, col) in cells {
            last = engine.submit_move(Coordinates::new(row, col)).unwrap();
        }
        last
    }

    #[test]
    fn test_new_engine_awaits_setup() {
        let engine = MatchEngine::new();
        assert_eq!(engine.phase(), MatchPhase::AwaitingSetup);
        assert!(engine.current_player().is_none());
        assert!(engine.standings().is_none());
    }

    #[test]
    fn test_move_before_setup_rejected() {
        let mut engine = MatchEngine::new();
        let err = engine.submit_move(Coordinates::new(0, 0)).unwrap_err();
        assert_eq!(
            err.kind(),
            crate::MatchErrorKind::InvalidMove(MoveRejection::NoRoundInProgress)
        );
    }

    #[test]
    fn test_configure_rejects_identical_signs() {
        let mut engine = MatchEngine::new();
        let err = engine
            .configure(
                PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
                PlayerDescriptor::new("Bob", Sign::Cross, ControlMode::Human),
                3,
            )
            .unwrap_err();
        assert_eq!(
            err.kind(),
            crate::MatchErrorKind::InvalidConfiguration(ConfigurationIssue::IdenticalSigns(
                Sign::Cross
            ))
        );
        assert_eq!(engine.phase(), MatchPhase::AwaitingSetup);
    }

    #[test]
    fn test_configure_rejects_zero_rounds_and_blank_names() {
        let mut engine = MatchEngine::new();
        let err = engine
            .configure(
                PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
                PlayerDescriptor::new("   ", Sign::Zero, ControlMode::Human),
                3,
            )
            .unwrap_err();
        assert_eq!(
            err.kind(),
            crate::MatchErrorKind::InvalidConfiguration(ConfigurationIssue::EmptyName(
                PlayerId::Two
            ))
        );

        let err = engine
            .configure(
                PlayerDescriptor::new("Alice", Sign::Cross, ControlMode::Human),
                PlayerDescriptor::new("Bob", Sign::Zero, ControlMode::Human),
                0,
            )
            .unwrap_err();
        assert_eq!(
            err.kind(),
            crate::MatchErrorKind::InvalidConfiguration(ConfigurationIssue::ZeroRounds)
        );
    }

    #[test]
    fn test_draw_keeps_last_mover_current() {
        let mut engine = engine(3);
        // X O X / X O O / O X X, last move by X at (2,2)
        let signal = play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(signal, MoveSignal::RoundDraw);
        assert_eq!(engine.current_id(), Some(PlayerId::One));
        assert_eq!(engine.round_index(), 2);
        assert_eq!(engine.standings().unwrap().total_wins(), 0);
    }

    #[test]
    fn test_board_kept_until_next_round() {
        let mut engine = engine(3);
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(engine.phase(), MatchPhase::RoundResolved);
        assert!(engine.board().has_line(Sign::Cross));
        assert_eq!(engine.history().len(), 5);

        engine.start_next_round().unwrap();
        assert_eq!(engine.board(), &Board::new());
        assert!(engine.history().is_empty());
        assert_eq!(engine.current_id(), Some(PlayerId::One));
    }

    #[test]
    fn test_start_next_round_phase_errors() {
        let mut engine = MatchEngine::new();
        assert_eq!(
            engine.start_next_round().unwrap_err().kind(),
            crate::MatchErrorKind::IllegalState(StateViolation::NotConfigured)
        );

        let mut engine = self::engine(1);
        assert_eq!(
            engine.start_next_round().unwrap_err().kind(),
            crate::MatchErrorKind::IllegalState(StateViolation::RoundInProgress)
        );

        let signal = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(signal, MoveSignal::MatchWin);
        assert_eq!(
            engine.start_next_round().unwrap_err().kind(),
            crate::MatchErrorKind::IllegalState(StateViolation::MatchResolved)
        );
    }

    #[test]
    fn test_match_loss_is_relative_to_last_mover() {
        let mut engine = engine(3).with_round_policy(RoundPolicy::PlayAllRounds);
        // Round 1: Bob (0) wins the middle row.
        let signal = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(signal, MoveSignal::RoundWin(PlayerId::Two));
        engine.start_next_round().unwrap();
        // Round 2: Bob starts and wins again.
        assert_eq!(engine.current_id(), Some(PlayerId::Two));
        let signal = play(&mut engine, &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
        assert_eq!(signal, MoveSignal::RoundWin(PlayerId::Two));
        engine.start_next_round().unwrap();
        // Round 3: Alice takes the top row with the last move of the match.
        let signal = play(&mut engine, &[(1, 0), (0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(signal, MoveSignal::MatchLoss);

        let result = engine.result().unwrap();
        assert_eq!(result.perspective, PlayerId::One);
        assert_eq!(result.winner(), Some(PlayerId::Two));
        assert_eq!(engine.phase(), MatchPhase::MatchResolved);
        assert_eq!(engine.round_index(), 3);
    }

    #[test]
    fn test_reconfigure_resets_wins() {
        let mut engine = engine(3);
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(engine.standings().unwrap().total_wins(), 1);

        engine
            .configure(
                PlayerDescriptor::new("Carol", Sign::Zero, ControlMode::Computer),
                PlayerDescriptor::new("Dave", Sign::Cross, ControlMode::Human),
                5,
            )
            .unwrap();
        let standings = engine.standings().unwrap();
        assert_eq!(standings.total_wins(), 0);
        assert_eq!(standings.one().name(), "Carol");
        assert_eq!(engine.round_index(), 1);
        assert_eq!(engine.round_count(), 5);
        assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
        assert_eq!(engine.board(), &Board::new());
    }
}
