//! Model-View-Intent (MVI) primitives for the lookup view.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value describing everything the view renders
//! - **Intent**: key presses, fetch completions, fetch failures
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
