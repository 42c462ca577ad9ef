//! News state container.
//!
//! - `state.rs` - `NewsState` and its sentinels
//! - `intent.rs` - fetch phases and setters
//! - `reducer.rs` - pure transitions, including the generation check
//! - `store.rs` - state owner, generation counter and `fetch_news`

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::NewsIntent;
pub use reducer::NewsReducer;
pub use state::{NewsState, FETCH_FAILED_FALLBACK, LATEST_QUERY};
pub use store::{fetch_request, FetchTicket, NewsStore};
