//! The seam between the state container and the network.

use async_trait::async_trait;

use super::article::NewsArticle;
use super::error::NewsError;

/// Parameters of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Free-text query. `None` or blank means "use the fallback term".
    pub query: Option<String>,
    /// 1-based page, sent only when the API paginates for us.
    pub page: Option<u32>,
    /// Maximum number of articles to return.
    pub max: u32,
}

/// Anything that can answer a search request with a list of articles.
///
/// Implementations perform exactly one lookup per call: no retries, no
/// caching, no deduplication of identical in-flight requests.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_articles(&self, request: &FetchRequest) -> Result<Vec<NewsArticle>, NewsError>;
}
