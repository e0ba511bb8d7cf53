//! Unidirectional state primitives shared by the screen modules.
//!
//! Each screen keeps its state in a plain value that is only ever replaced
//! by running a reducer over `(state, intent)`. Side effects — debounce
//! timers, network calls, persistence — live outside the reducers, in the
//! runtime and the search coordinator, and feed their outcomes back in as
//! intents.

/// Marker trait for intents: user actions, timer expiries, and request
/// completions.
pub trait Intent: Send + 'static {}

/// Marker trait for screen state. States are immutable snapshots; a
/// transition produces a new value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A pure transition function. The reducer is the only place where state
/// changes happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
