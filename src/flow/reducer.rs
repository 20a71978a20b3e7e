//! Reducer trait for the screen flow.

use super::intent::Intent;
use super::state::FlowState;

/// Folds intents into state.
///
/// The reducer is the only place a flow state transitions, and it must be
/// pure: `(State, Intent) -> State`, no I/O, no clocks.
pub trait Reducer {
    type State: FlowState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
