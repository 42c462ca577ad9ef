//! One-shot, non-interactive mode: fetch, print the page, exit.

use std::io::{self, Write};

use crate::config::FeedConfig;
use crate::news::NewsSource;
use crate::ui::feed::NewsStore;
use crate::ui::pagination::{page_view, PageView};

/// Fetch with the store's committed parameters and print the resulting page.
///
/// A failed fetch is returned as an error carrying the state's message.
pub async fn print_page<W: Write>(
    store: &mut NewsStore,
    source: &dyn NewsSource,
    feed: &FeedConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    store.fetch_news(source, feed).await;
    let state = store.state();
    if let Some(error) = &state.error {
        anyhow::bail!("{}", error);
    }
    write_page(&page_view(state, feed), out)?;
    Ok(())
}

pub fn write_page<W: Write>(view: &PageView<'_>, out: &mut W) -> io::Result<()> {
    if view.items.is_empty() {
        writeln!(out, "No results found.")?;
    }
    for (position, item) in view.items.iter().enumerate() {
        let title = item.article.title.as_deref().unwrap_or("(untitled)");
        match item.article.source_name() {
            Some(source) => writeln!(out, "{}. {} [{}]", position + 1, title, source)?,
            None => writeln!(out, "{}. {}", position + 1, title)?,
        }
    }
    match view.total_pages {
        Some(total) => writeln!(out, "Page {} of {}", view.current_page, total)?,
        None => writeln!(out, "Page {}", view.current_page)?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{ArticleSource, NewsArticle};
    use crate::ui::pagination::client_page;

    #[test]
    fn writes_numbered_lines_with_sources() {
        let articles = vec![
            NewsArticle {
                title: Some("Tesla earnings".into()),
                source: Some(ArticleSource {
                    name: Some("Reuters".into()),
                    ..ArticleSource::default()
                }),
                ..NewsArticle::default()
            },
            NewsArticle::default(),
        ];
        let view = client_page(&articles, "", 1, 3);
        let mut out = Vec::new();
        write_page(&view, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. Tesla earnings [Reuters]\n2. (untitled)\nPage 1 of 1\n"
        );
    }

    #[test]
    fn empty_page_says_so() {
        let view = client_page(&[], "x", 1, 3);
        let mut out = Vec::new();
        write_page(&view, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No results found.\nPage 1 of 1\n"
        );
    }
}
