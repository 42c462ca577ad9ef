use crate::ui::feed::LATEST_QUERY;
use crate::ui::mvi::UiState;

/// The search box contents, separate from the committed query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchDraftState {
    pub text: String,
}

impl UiState for SearchDraftState {}

impl SearchDraftState {
    /// The query this draft commits to: trimmed, empty becomes `"latest"`.
    pub fn effective_query(&self) -> String {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            LATEST_QUERY.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// What the search box shows for a committed query.
pub fn display_text(committed: Option<&str>) -> String {
    match committed {
        None => String::new(),
        Some(query) if query == LATEST_QUERY => String::new(),
        Some(query) => query.to_string(),
    }
}
