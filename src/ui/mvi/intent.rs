//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, paging, picking a word)
/// or system events (a lookup finished or failed). Reducers consume them.
pub trait Intent: Send + 'static {}
