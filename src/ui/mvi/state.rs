//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloneable values that hold all data needed to render,
/// and compare with `PartialEq` so tests can assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
