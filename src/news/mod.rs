//! News search API: article model, client and the `NewsSource` seam.

mod article;
mod client;
mod error;
mod source;

pub use article::{ArticleSource, NewsArticle, SearchResponse};
pub use client::NewsClient;
pub use error::NewsError;
pub use source::{FetchRequest, NewsSource};
