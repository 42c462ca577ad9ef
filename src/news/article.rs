//! Article shapes returned by the news search API.
//!
//! Every field is optional: the API makes no guarantee about which ones are
//! present, so consumers must treat all of them as nullable.

use serde::{Deserialize, Serialize};

/// Publisher of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub country: Option<String>,
}

/// A single article as received from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub lang: Option<String>,
    pub source: Option<ArticleSource>,
    pub published_at: Option<String>,
}

impl NewsArticle {
    /// Stable key for list rendering.
    ///
    /// `id` when present, otherwise `url` combined with the article's
    /// position in the list it came from.
    pub fn key(&self, index: usize) -> String {
        match (&self.id, &self.url) {
            (Some(id), _) if !id.is_empty() => id.clone(),
            (_, Some(url)) => format!("{}#{}", url, index),
            _ => format!("#{}", index),
        }
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|source| source.name.as_deref())
    }

    /// Case-insensitive substring match against title, description and
    /// source name. `needle` must already be lowercased; an empty needle
    /// matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.title.as_deref(),
            self.description.as_deref(),
            self.source_name(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Body of a `/search` response.
///
/// `articles` stays optional so a body without it can be told apart from
/// an empty result set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_articles: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<NewsArticle>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str, source: &str) -> NewsArticle {
        NewsArticle {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            source: Some(ArticleSource {
                name: Some(source.to_string()),
                ..ArticleSource::default()
            }),
            ..NewsArticle::default()
        }
    }

    #[test]
    fn decodes_partial_article() {
        let json = r#"{
            "title": "Rust 2.0",
            "publishedAt": "2026-01-01T10:00:00Z",
            "source": {"name": "The Register"},
            "unknownField": 42
        }"#;
        let parsed: NewsArticle = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Rust 2.0"));
        assert_eq!(parsed.published_at.as_deref(), Some("2026-01-01T10:00:00Z"));
        assert_eq!(parsed.source_name(), Some("The Register"));
        assert!(parsed.id.is_none());
        assert!(parsed.image.is_none());
    }

    #[test]
    fn key_prefers_id_then_url() {
        let with_id = NewsArticle {
            id: Some("abc".to_string()),
            url: Some("https://a.example".to_string()),
            ..NewsArticle::default()
        };
        assert_eq!(with_id.key(4), "abc");

        let with_url = NewsArticle {
            url: Some("https://a.example".to_string()),
            ..NewsArticle::default()
        };
        assert_eq!(with_url.key(4), "https://a.example#4");

        assert_eq!(NewsArticle::default().key(7), "#7");
    }

    #[test]
    fn matches_is_case_insensitive_across_fields() {
        let item = article("Tesla recalls cars", "Autopilot issue", "Reuters");
        assert!(item.matches("tesla"));
        assert!(item.matches("autopilot"));
        assert!(item.matches("reuters"));
        assert!(item.matches(""));
        assert!(!item.matches("bbc"));
    }

    #[test]
    fn matches_ignores_missing_fields() {
        let item = NewsArticle::default();
        assert!(!item.matches("anything"));
        assert!(item.matches(""));
    }

    #[test]
    fn response_without_articles_is_distinguishable() {
        let missing: SearchResponse = serde_json::from_str(r#"{"totalArticles": 3}"#).unwrap();
        assert!(missing.articles.is_none());

        let empty: SearchResponse = serde_json::from_str(r#"{"articles": []}"#).unwrap();
        assert_eq!(empty.articles, Some(Vec::new()));
    }
}
