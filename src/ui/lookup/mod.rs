//! Lookup view feature module.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - `QueryState` and the render mode it maps to
//! - `intent.rs` - user actions and fetch outcomes
//! - `reducer.rs` - state transitions
//! - `pagination.rs` - page slicing and navigability

mod intent;
mod pagination;
mod reducer;
mod state;

pub use intent::LookupIntent;
pub use pagination::{can_go_next, can_go_previous, page_count, visible_slice, PAGE_SIZE};
pub use reducer::LookupReducer;
pub use state::{QueryState, RenderMode, StalePolicy};
