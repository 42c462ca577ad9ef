//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, paging) or completions of
/// asynchronous work (a fetch resolving, the debounce timer firing).
pub trait Intent: Send + 'static {}
