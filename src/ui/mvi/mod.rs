//! Model-View-Intent (MVI) primitives shared by the screen's features.
//!
//! ```text
//! keystroke / timer / fetch result ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                              │
//!        └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure; side effects (HTTP, timers) live in the controller
//! and come back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
