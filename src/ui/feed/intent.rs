//! Intents accepted by the news state container.

use crate::news::NewsArticle;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NewsIntent {
    /// A fetch was issued with this generation.
    FetchPending { generation: u64 },

    /// A fetch resolved with articles.
    FetchFulfilled {
        generation: u64,
        articles: Vec<NewsArticle>,
    },

    /// A fetch failed. `None` or a blank message falls back to a fixed text.
    FetchRejected {
        generation: u64,
        message: Option<String>,
    },

    /// Commit a query. Always moves back to page 1.
    SetSearchText { query: String },

    /// Move the page cursor. Values below 1 are clamped.
    SetCurrentPage { page: u32 },
}

impl Intent for NewsIntent {}
