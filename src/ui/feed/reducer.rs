use crate::ui::mvi::Reducer;

use super::intent::NewsIntent;
use super::state::{NewsState, FETCH_FAILED_FALLBACK};

pub struct NewsReducer;

impl Reducer for NewsReducer {
    type State = NewsState;
    type Intent = NewsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NewsIntent::FetchPending { generation } => NewsState {
                loading: true,
                error: None,
                generation,
                ..state
            },

            NewsIntent::FetchFulfilled {
                generation,
                articles,
            } => {
                if !state.awaits(generation) {
                    return state;
                }
                NewsState {
                    loading: false,
                    articles,
                    ..state
                }
            }

            NewsIntent::FetchRejected {
                generation,
                message,
            } => {
                if !state.awaits(generation) {
                    return state;
                }
                // Previous articles stay: stale data beats a blank screen.
                let error = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FETCH_FAILED_FALLBACK.to_string());
                NewsState {
                    loading: false,
                    error: Some(error),
                    ..state
                }
            }

            NewsIntent::SetSearchText { query } => NewsState {
                search_text: Some(query),
                current_page: 1,
                ..state
            },

            NewsIntent::SetCurrentPage { page } => NewsState {
                current_page: page.max(1),
                ..state
            },
        }
    }
}
