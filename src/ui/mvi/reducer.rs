//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place state transitions happen, and it
/// performs no I/O: network calls are issued by the caller and their
/// outcome comes back as another intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
