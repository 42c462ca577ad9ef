use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::{FeedConfig, FeedMode};
use crate::news::{NewsArticle, NewsError, NewsSource};
use crate::ui::debounce::Debouncer;
use crate::ui::events::AppEvent;
use crate::ui::feed::{NewsState, NewsStore, LATEST_QUERY};
use crate::ui::input::handle_key;
use crate::ui::mvi::Reducer;
use crate::ui::pagination::{page_view, PageItem, PageView};
use crate::ui::search::{SearchDraftState, SearchIntent, SearchReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

type FetchKey = (Option<String>, u32);

/// Screen controller for the news list.
///
/// Owns the news store, the local search draft and the debounce timer.
/// Every mutation happens on the thread that calls into `App`; network
/// fetches and timers run on the tokio runtime and report back through
/// the event channel.
pub struct App {
    should_quit: bool,
    feed: FeedConfig,
    store: NewsStore,
    search: SearchDraftState,
    debouncer: Debouncer,
    source: Arc<dyn NewsSource>,
    runtime: Handle,
    events: Sender<AppEvent>,
    /// Parameters of the last issued fetch (server mode trigger).
    last_fetch_key: Option<FetchKey>,
    /// Committed query the draft was last synchronised with.
    observed_search_text: Option<String>,
    /// Display key of the highlighted article on the current page.
    selected_key: Option<String>,
    spinner_tick: usize,
}

impl App {
    pub fn new(
        feed: FeedConfig,
        initial: NewsState,
        source: Arc<dyn NewsSource>,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let debouncer = Debouncer::new(runtime.clone(), Duration::from_millis(feed.debounce_ms));
        Self {
            should_quit: false,
            feed,
            store: NewsStore::new(initial),
            search: SearchDraftState::default(),
            debouncer,
            source,
            runtime,
            events,
            last_fetch_key: None,
            observed_search_text: None,
            selected_key: None,
            spinner_tick: 0,
        }
    }

    /// Starting state for `mode`, optionally seeded with a query and page.
    pub fn initial_state(mode: FeedMode, query: Option<&str>, page: u32) -> NewsState {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let search_text = match mode {
            FeedMode::Server => Some(query.unwrap_or(LATEST_QUERY).to_string()),
            FeedMode::Client => query.map(str::to_string),
        };
        NewsState {
            search_text,
            current_page: page.max(1),
            ..NewsState::default()
        }
    }

    /// Synchronise the draft and issue the first fetch.
    pub fn mount(&mut self) {
        let committed = self.store.state().search_text.clone();
        self.observed_search_text = committed.clone();
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Resync { committed });
        self.fetch_news();
    }

    pub fn state(&self) -> &NewsState {
        self.store.state()
    }

    pub fn search_draft(&self) -> &SearchDraftState {
        &self.search
    }

    pub fn feed(&self) -> &FeedConfig {
        &self.feed
    }

    pub fn page_view(&self) -> PageView<'_> {
        page_view(self.store.state(), &self.feed)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.debouncer.cancel();
        self.should_quit = true;
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::SearchSettled { generation } => self.on_search_settled(generation),
            AppEvent::FetchCompleted { generation, result } => {
                self.on_fetch_completed(generation, result)
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.store.state().loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn type_char(&mut self, ch: char) {
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Insert { ch });
        self.on_draft_changed();
    }

    pub fn backspace(&mut self) {
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Backspace);
        self.on_draft_changed();
    }

    /// Empty the search box and commit "no query" right away.
    pub fn reset_search(&mut self) {
        self.debouncer.cancel();
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Clear);
        match self.feed.mode {
            FeedMode::Server => self.commit_search(LATEST_QUERY),
            FeedMode::Client => self.commit_search(""),
        }
    }

    /// Commit `query` as if it came from outside the search box.
    ///
    /// The draft is resynchronised from the committed value.
    pub fn commit_search(&mut self, query: &str) {
        self.store.set_search_text(query);
        self.after_dispatch();
    }

    fn on_draft_changed(&mut self) {
        match self.feed.mode {
            FeedMode::Server => {
                let events = self.events.clone();
                self.debouncer.schedule(move |generation| {
                    let _ = events.send(AppEvent::SearchSettled { generation });
                });
            }
            FeedMode::Client => {
                let text = self.search.text.clone();
                self.observed_search_text = Some(text.clone());
                self.store.set_search_text(text);
                self.after_dispatch();
            }
        }
    }

    /// The debounce delay elapsed: commit the draft if it changed the query.
    ///
    /// Firings superseded by a later keystroke are ignored, even when they
    /// were already queued.
    pub fn on_search_settled(&mut self, generation: u64) {
        if !self.debouncer.claim(generation) {
            tracing::debug!(generation, "Ignoring superseded search timer");
            return;
        }
        let query = self.search.effective_query();
        if self.store.state().search_text.as_deref() == Some(query.as_str()) {
            return;
        }
        tracing::debug!(query = %query, "Committing search");
        self.observed_search_text = Some(query.clone());
        self.store.set_search_text(query);
        self.after_dispatch();
    }

    pub fn next_page(&mut self) {
        let (has_next, page) = {
            let view = self.page_view();
            (view.has_next(), view.current_page)
        };
        if has_next {
            self.store.set_current_page(page + 1);
            self.after_dispatch();
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.store.state().current_page;
        if page > 1 {
            self.store.set_current_page(page - 1);
            self.after_dispatch();
        }
    }

    /// Move the highlight to the next article on the page.
    pub fn select_next(&mut self) {
        self.move_selection(true);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(false);
    }

    /// Selection follows the article's display key, so it survives a
    /// refetch that returns the same article and is lost when it leaves the
    /// page.
    fn move_selection(&mut self, forward: bool) {
        let keys: Vec<String> = self.page_view().items.iter().map(PageItem::key).collect();
        if keys.is_empty() {
            self.selected_key = None;
            return;
        }
        let current = self
            .selected_key
            .as_ref()
            .and_then(|selected| keys.iter().position(|key| key == selected));
        let last = keys.len() - 1;
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.selected_key = Some(keys[index].clone());
    }

    /// Re-run the fetch with the current committed parameters.
    pub fn refresh(&mut self) {
        self.fetch_news();
    }

    pub fn on_fetch_completed(
        &mut self,
        generation: u64,
        result: Result<Vec<NewsArticle>, NewsError>,
    ) {
        self.store.complete_fetch(generation, result);
    }

    /// React to committed changes: resync the draft when the query changed
    /// from outside, fetch when the query or page changed (server mode).
    fn after_dispatch(&mut self) {
        if self.feed.mode == FeedMode::Client {
            return;
        }

        let committed = self.store.state().search_text.clone();
        if committed != self.observed_search_text {
            self.observed_search_text = committed.clone();
            dispatch_mvi!(self, search, SearchReducer, SearchIntent::Resync { committed });
        }

        let (search_text, page) = self.store.state().fetch_key();
        let key = (search_text.map(str::to_string), page);
        if self.last_fetch_key.as_ref() != Some(&key) {
            self.fetch_news();
        }
    }

    /// Issue one fetch with the committed parameters read right now.
    pub fn fetch_news(&mut self) {
        let (ticket, request) = self.store.issue_fetch(&self.feed);
        let generation = ticket.generation;
        self.last_fetch_key = Some((ticket.search_text, ticket.page));

        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = source.fetch_articles(&request).await;
            let _ = events.send(AppEvent::FetchCompleted { generation, result });
        });
    }
}
