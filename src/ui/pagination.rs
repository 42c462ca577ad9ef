//! Page views derived from `NewsState`.
//!
//! Nothing here is stored: the view is recomputed from the state on every
//! render, so it can never drift from the articles it was built from.

use crate::config::{FeedConfig, FeedMode};
use crate::news::NewsArticle;
use crate::ui::feed::NewsState;

/// One article on the current page with its index in `NewsState::articles`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageItem<'a> {
    pub index: usize,
    pub article: &'a NewsArticle,
}

impl PageItem<'_> {
    pub fn key(&self) -> String {
        self.article.key(self.index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: Vec<PageItem<'a>>,
    pub current_page: u32,
    /// Known only when paginating locally.
    pub total_pages: Option<u32>,
    /// Articles matching the filter (client mode) or on this page (server mode).
    pub matched: usize,
}

impl PageView<'_> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        match self.total_pages {
            Some(total) => self.current_page < total,
            None => !self.items.is_empty(),
        }
    }

    /// Whether page controls should be shown at all.
    pub fn shows_controls(&self) -> bool {
        self.matched > 0 || self.has_prev()
    }
}

/// Build the page for `state` under the configured mode.
pub fn page_view<'a>(state: &'a NewsState, feed: &FeedConfig) -> PageView<'a> {
    match feed.mode {
        FeedMode::Client => client_page(
            &state.articles,
            state.search_text.as_deref().unwrap_or(""),
            state.current_page,
            feed.items_per_page,
        ),
        FeedMode::Server => server_page(&state.articles, state.current_page),
    }
}

/// Filter `articles` by `query` and cut page `page` of `per_page` items.
pub fn client_page<'a>(
    articles: &'a [NewsArticle],
    query: &str,
    page: u32,
    per_page: u32,
) -> PageView<'a> {
    let needle = query.trim().to_lowercase();
    let per_page = per_page.max(1) as usize;
    let page = page.max(1);

    let filtered: Vec<PageItem<'a>> = articles
        .iter()
        .enumerate()
        .filter(|(_, article)| article.matches(&needle))
        .map(|(index, article)| PageItem { index, article })
        .collect();

    let matched = filtered.len();
    let total_pages = matched.div_ceil(per_page).max(1) as u32;
    let items = filtered
        .into_iter()
        .skip((page as usize - 1) * per_page)
        .take(per_page)
        .collect();

    PageView {
        items,
        current_page: page,
        total_pages: Some(total_pages),
        matched,
    }
}

/// The API already returned exactly this page.
pub fn server_page(articles: &[NewsArticle], page: u32) -> PageView<'_> {
    PageView {
        items: articles
            .iter()
            .enumerate()
            .map(|(index, article)| PageItem { index, article })
            .collect(),
        current_page: page.max(1),
        total_pages: None,
        matched: articles.len(),
    }
}
