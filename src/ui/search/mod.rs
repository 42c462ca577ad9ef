//! Local search draft of the screen controller.
//!
//! Keystrokes edit the draft only. The controller decides when the draft
//! is committed to the news state (debounced in server mode).

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{display_text, SearchDraftState};
