//! State machine trait for view-state enums.

use super::ValidationError;

/// A closed set of states with an explicit transition table.
///
/// Implementors list the targets reachable from each state; validation and
/// terminal checks are derived from that list.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// All valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs a transition, rejecting targets outside the table.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
