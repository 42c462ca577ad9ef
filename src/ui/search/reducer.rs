use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{display_text, SearchDraftState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchDraftState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Insert { ch } => {
                let mut text = state.text;
                text.push(ch);
                SearchDraftState { text }
            }
            SearchIntent::Backspace => {
                let mut text = state.text;
                text.pop();
                SearchDraftState { text }
            }
            SearchIntent::Clear => SearchDraftState::default(),
            SearchIntent::Resync { committed } => SearchDraftState {
                text: display_text(committed.as_deref()),
            },
        }
    }
}
