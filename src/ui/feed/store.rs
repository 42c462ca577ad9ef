use crate::config::{FeedConfig, FeedMode};
use crate::news::{FetchRequest, NewsArticle, NewsError, NewsSource};
use crate::ui::mvi::Reducer;

use super::intent::NewsIntent;
use super::reducer::NewsReducer;
use super::state::NewsState;

/// Snapshot of the committed parameters a fetch was issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub search_text: Option<String>,
    pub page: u32,
}

/// Build the request for `ticket` under the configured feed mode.
///
/// Server mode sends the committed query and page. Client mode always asks
/// for one unpaginated batch with the fallback query; filtering happens
/// locally.
pub fn fetch_request(feed: &FeedConfig, ticket: &FetchTicket) -> FetchRequest {
    match feed.mode {
        FeedMode::Server => FetchRequest {
            query: ticket.search_text.clone(),
            page: Some(ticket.page),
            max: feed.page_size,
        },
        FeedMode::Client => FetchRequest {
            query: None,
            page: None,
            max: feed.batch_size,
        },
    }
}

/// Owner of `NewsState`.
///
/// All mutations go through `dispatch`. Fetches are split into
/// `begin_fetch` and `complete_fetch` so the network call can run
/// elsewhere while the state stays on one thread.
#[derive(Debug, Default)]
pub struct NewsStore {
    state: NewsState,
    next_generation: u64,
}

impl NewsStore {
    pub fn new(initial: NewsState) -> Self {
        let next_generation = initial.generation;
        Self {
            state: initial,
            next_generation,
        }
    }

    pub fn state(&self) -> &NewsState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: NewsIntent) {
        self.state = NewsReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn set_search_text(&mut self, query: impl Into<String>) {
        self.dispatch(NewsIntent::SetSearchText {
            query: query.into(),
        });
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.dispatch(NewsIntent::SetCurrentPage { page });
    }

    /// Issue a new generation, enter the pending phase and return the
    /// parameters the request must be made with.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        let ticket = FetchTicket {
            generation,
            search_text: self.state.search_text.clone(),
            page: self.state.current_page,
        };
        self.dispatch(NewsIntent::FetchPending { generation });
        ticket
    }

    /// Begin a fetch and build its request under `feed`.
    pub fn issue_fetch(&mut self, feed: &FeedConfig) -> (FetchTicket, FetchRequest) {
        let ticket = self.begin_fetch();
        let request = fetch_request(feed, &ticket);
        tracing::info!(
            generation = ticket.generation,
            query = ?ticket.search_text,
            page = ticket.page,
            "Fetch issued"
        );
        (ticket, request)
    }

    /// Commit the outcome of fetch `generation`.
    ///
    /// Returns false when the reducer dropped it: a newer fetch has been
    /// issued since, or this one was already completed.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<NewsArticle>, NewsError>,
    ) -> bool {
        // The reducer accepts a completion only while its generation is
        // pending, and accepting it is what clears `loading`.
        let was_loading = self.state.loading;

        let outcome = match result {
            Ok(articles) => {
                let count = articles.len();
                self.dispatch(NewsIntent::FetchFulfilled {
                    generation,
                    articles,
                });
                Ok(count)
            }
            Err(err) => {
                let message = err.to_string();
                self.dispatch(NewsIntent::FetchRejected {
                    generation,
                    message: Some(message.clone()),
                });
                Err((err.error_type(), message))
            }
        };

        if !(was_loading && !self.state.loading) {
            tracing::debug!(
                generation,
                latest = self.state.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        match outcome {
            Ok(count) => tracing::info!(generation, count, "Fetch fulfilled"),
            Err((error_type, message)) => {
                tracing::warn!(generation, error_type, "Fetch rejected: {}", message)
            }
        }
        true
    }

    /// Run one complete fetch against `source` with the current committed
    /// parameters.
    pub async fn fetch_news(&mut self, source: &dyn NewsSource, feed: &FeedConfig) {
        let (ticket, request) = self.issue_fetch(feed);
        let result = source.fetch_articles(&request).await;
        self.complete_fetch(ticket.generation, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        responses: Mutex<Vec<Result<Vec<NewsArticle>, NewsError>>>,
        requests: Mutex<Vec<FetchRequest>>,
    }

    impl Scripted {
        fn new(responses: Vec<Result<Vec<NewsArticle>, NewsError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NewsSource for Scripted {
        async fn fetch_articles(
            &self,
            request: &FetchRequest,
        ) -> Result<Vec<NewsArticle>, NewsError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn titled(title: &str) -> NewsArticle {
        NewsArticle {
            title: Some(title.to_string()),
            ..NewsArticle::default()
        }
    }

    #[test]
    fn begin_fetch_reads_committed_parameters() {
        let mut store = NewsStore::new(NewsState::with_search_text("tesla"));
        store.set_current_page(2);
        let ticket = store.begin_fetch();
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.search_text.as_deref(), Some("tesla"));
        assert_eq!(ticket.page, 2);
        assert!(store.state().loading);
    }

    #[test]
    fn older_result_after_newer_is_dropped() {
        let mut store = NewsStore::default();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(store.complete_fetch(second.generation, Ok(vec![titled("new")])));
        assert!(!store.complete_fetch(first.generation, Ok(vec![titled("old")])));

        assert_eq!(store.state().articles, vec![titled("new")]);
        assert!(!store.state().loading);
    }

    #[test]
    fn newer_in_flight_keeps_loading() {
        let mut store = NewsStore::default();
        let first = store.begin_fetch();
        let _second = store.begin_fetch();

        assert!(!store.complete_fetch(first.generation, Err(NewsError::MalformedResponse)));
        assert!(store.state().loading);
        assert!(store.state().error.is_none());
    }

    #[test]
    fn client_mode_requests_one_batch() {
        let feed = FeedConfig {
            mode: FeedMode::Client,
            ..FeedConfig::default()
        };
        let ticket = FetchTicket {
            generation: 1,
            search_text: Some("ignored".into()),
            page: 3,
        };
        assert_eq!(
            fetch_request(&feed, &ticket),
            FetchRequest {
                query: None,
                page: None,
                max: 400,
            }
        );
    }

    #[tokio::test]
    async fn fetch_news_failure_keeps_articles() {
        let source = Scripted::new(vec![
            Ok(vec![titled("A"), titled("B")]),
            Err(NewsError::Upstream {
                status: 500,
                message: "down".into(),
            }),
        ]);
        let feed = FeedConfig::default();
        let mut store = NewsStore::new(NewsState::with_search_text("latest"));

        store.fetch_news(&source, &feed).await;
        store.fetch_news(&source, &feed).await;

        let state = store.state();
        assert_eq!(state.articles, vec![titled("A"), titled("B")]);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("News API error: 500 - down"));

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].query.as_deref(), Some("latest"));
        assert_eq!(requests[0].page, Some(1));
        assert_eq!(requests[0].max, 10);
    }

    #[test]
    fn completing_twice_commits_once() {
        let mut store = NewsStore::default();
        let ticket = store.begin_fetch();

        assert!(store.complete_fetch(ticket.generation, Ok(vec![titled("first")])));
        assert!(!store.complete_fetch(ticket.generation, Ok(vec![titled("again")])));
        assert_eq!(store.state().articles, vec![titled("first")]);
    }

    #[test]
    fn issue_fetch_pairs_ticket_with_request() {
        let mut store = NewsStore::new(NewsState::with_search_text("tesla"));
        store.set_current_page(2);
        let (ticket, request) = store.issue_fetch(&FeedConfig::default());

        assert_eq!(ticket.generation, store.state().generation);
        assert_eq!(request.query.as_deref(), Some("tesla"));
        assert_eq!(request.page, Some(2));
        assert_eq!(request.max, 10);
    }
}
