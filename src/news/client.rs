use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::{ApiConfig, SecureString};

use super::article::{NewsArticle, SearchResponse};
use super::error::NewsError;
use super::source::{FetchRequest, NewsSource};

/// HTTP client for a GNews-compatible `/search` endpoint.
pub struct NewsClient {
    http: Client,
    endpoint: Url,
    language: String,
    fallback_query: String,
    api_key: SecureString,
}

impl NewsClient {
    pub fn new(config: &ApiConfig, api_key: SecureString) -> Result<Self, NewsError> {
        let raw = format!("{}/search", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| NewsError::InvalidEndpoint {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(NewsError::InvalidEndpoint {
                url: raw,
                reason: "URL cannot carry query parameters".to_string(),
            });
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(NewsError::Client)?;

        Ok(Self {
            http,
            endpoint,
            language: config.language.clone(),
            fallback_query: config.fallback_query.clone(),
            api_key,
        })
    }

    /// The query actually sent for `request`.
    pub fn effective_query<'a>(&'a self, request: &'a FetchRequest) -> &'a str {
        request
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .unwrap_or(&self.fallback_query)
    }

    /// Build the full request URL, API key included.
    pub fn search_url(&self, request: &FetchRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("q", self.effective_query(request))
                .append_pair("lang", &self.language)
                .append_pair("max", &request.max.to_string())
                .append_pair("apikey", self.api_key.expose());
            if let Some(page) = request.page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch_articles(&self, request: &FetchRequest) -> Result<Vec<NewsArticle>, NewsError> {
        tracing::debug!(
            query = self.effective_query(request),
            page = ?request.page,
            max = request.max,
            "Requesting articles"
        );

        let response = self
            .http
            .get(self.search_url(request))
            .send()
            .await
            .map_err(NewsError::connection)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body)
                    .or_else(|| status.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let body: SearchResponse = response.json().await.map_err(NewsError::decode)?;
        let articles = body.articles.ok_or(NewsError::MalformedResponse)?;
        tracing::debug!(
            received = articles.len(),
            total = ?body.total_articles,
            "Articles received"
        );
        Ok(articles)
    }
}

/// Extract a human-readable message from an error body.
///
/// GNews answers `{"errors": ["..."]}`; other APIs use `{"message": "..."}`.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let from_errors = match value.get("errors") {
        Some(serde_json::Value::Array(items)) => items.first().and_then(|v| v.as_str()),
        Some(serde_json::Value::Object(map)) => map.values().next().and_then(|v| v.as_str()),
        _ => None,
    };
    from_errors
        .or_else(|| value.get("message").and_then(|v| v.as_str()))
        .map(str::to_string)
}
