//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_news;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsreel::config::FeedConfig;
use newsreel::news::{FetchRequest, NewsArticle, NewsError, NewsSource};
use newsreel::ui::app::App;
use newsreel::ui::events::AppEvent;
use newsreel::ui::feed::NewsState;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Write a config file pointing at `base_url` with an inline API key.
///
/// `extra` is appended verbatim (e.g. a `[feed]` section).
pub fn temp_config(base_url: &str, extra: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[api]
base_url = "{}"
api_key = "test-key"
connect_timeout_seconds = 2

{}
"#,
        base_url, extra
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn titled(title: &str) -> NewsArticle {
    NewsArticle {
        title: Some(title.to_string()),
        ..NewsArticle::default()
    }
}

pub fn titles(articles: &[NewsArticle]) -> Vec<String> {
    articles
        .iter()
        .map(|a| a.title.clone().unwrap_or_default())
        .collect()
}

// -- Scripted news source -----------------------------------------------------

pub struct Scripted {
    pub delay: Duration,
    pub result: Result<Vec<NewsArticle>, NewsError>,
}

impl Scripted {
    pub fn ok(titles: &[&str]) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(titles.iter().map(|t| titled(t)).collect()),
        }
    }

    pub fn err(status: u16, message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(NewsError::Upstream {
                status,
                message: message.to_string(),
            }),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// `NewsSource` answering from a queue and recording every request.
///
/// An empty queue answers with no articles.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push(&self, response: Scripted) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for ScriptedSource {
    async fn fetch_articles(&self, request: &FetchRequest) -> Result<Vec<NewsArticle>, NewsError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
            None => Ok(Vec::new()),
        }
    }
}

// -- App helpers --------------------------------------------------------------

/// Build an `App` on the current tokio runtime with its event receiver.
pub fn make_app(
    feed: FeedConfig,
    initial: NewsState,
    source: Arc<ScriptedSource>,
) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::new(
        feed,
        initial,
        source,
        tokio::runtime::Handle::current(),
        tx,
    );
    (app, rx)
}

/// Let spawned tasks run for `elapsed`, then feed every produced event
/// back into the app.
pub async fn advance(app: &mut App, rx: &Receiver<AppEvent>, elapsed: Duration) {
    tokio::time::sleep(elapsed).await;
    // Events can trigger more work (a commit issues a fetch); drain twice.
    for _ in 0..3 {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
}

pub fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(key(KeyCode::Char(ch)));
    }
}
