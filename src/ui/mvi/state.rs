//! Base trait for UI state.

/// Marker trait for state objects owned by a reducer.
///
/// States are replaced, never patched in place by the view: `Clone` to
/// snapshot, `PartialEq` to detect changes, `Default` for the initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
