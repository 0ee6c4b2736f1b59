//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every
//! [`HistoryStore`](crate::HistoryStore) reachable through its public API.
//! They are checked in debug builds after each append and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod aligned_records;
pub mod alternating_marks;
pub mod pointer_in_range;
pub mod single_cell_steps;

pub use aligned_records::AlignedRecordsInvariant;
pub use alternating_marks::AlternatingMarksInvariant;
pub use pointer_in_range::PointerInRangeInvariant;
pub use single_cell_steps::SingleCellStepsInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    AlignedRecordsInvariant,
    SingleCellStepsInvariant,
    AlternatingMarksInvariant,
    PointerInRangeInvariant,
);
