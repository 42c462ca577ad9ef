use crate::news::NewsArticle;
use crate::ui::mvi::UiState;

/// Committed query meaning "no user query, show the default results".
pub const LATEST_QUERY: &str = "latest";

/// Error shown when a failed fetch carries no message of its own.
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch news";

/// The single state slice behind the news screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsState {
    /// Articles of the latest successful fetch, in API order.
    pub articles: Vec<NewsArticle>,
    pub loading: bool,
    pub error: Option<String>,
    /// Committed query. `Some(LATEST_QUERY)` means no user query.
    pub search_text: Option<String>,
    /// 1-based page cursor, never below 1.
    pub current_page: u32,
    /// Generation of the most recently issued fetch.
    pub generation: u64,
}

impl Default for NewsState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            loading: false,
            error: None,
            search_text: None,
            current_page: 1,
            generation: 0,
        }
    }
}

impl UiState for NewsState {}

impl NewsState {
    pub fn with_search_text(query: impl Into<String>) -> Self {
        Self {
            search_text: Some(query.into()),
            ..Self::default()
        }
    }

    /// The pair whose changes trigger a fetch in server mode.
    pub fn fetch_key(&self) -> (Option<&str>, u32) {
        (self.search_text.as_deref(), self.current_page)
    }

    /// True while fetch `generation` is the latest issued and still pending.
    pub fn awaits(&self, generation: u64) -> bool {
        self.loading && generation == self.generation
    }
}
