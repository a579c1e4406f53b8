//! First-class invariants for a running game.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The controller checks them in debug builds; they can also be
//! tested independently.

pub mod balanced_marks;
pub mod single_winner;
pub mod turn_consistent;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
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

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Every invariant of a running game.
pub type CoreInvariants = (
    BalancedMarksInvariant,
    SingleWinnerInvariant,
    TurnConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, Token};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameController::default();
        assert!(CoreInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let mut game = GameController::new("A", "B", 4).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)] {
            game.play_round(row, col).unwrap();
            assert!(CoreInvariants::check_all(&game).is_ok());
        }
        assert!(game.game_state().is_over());
    }

    #[test]
    fn test_board_invariants_detect_violations() {
        let mut board = Board::new(3).unwrap();
        board.drop_token(0, 0, Token::X).unwrap();

        type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <BalancedMarksInvariant as Invariant<Board>>::description()
        );
    }
}
