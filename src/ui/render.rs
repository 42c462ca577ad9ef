use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pagination::PageItem;
use crate::ui::theme::{ACCENT, DESCRIPTION_TEXT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

const EMPTY_TEXT: &str = "No results found.";
const RETRY_TEXT: &str = "Press Ctrl+R to try again";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();
    let view = app.page_view();

    Header::new(&app.search_draft().text, state.loading, app.spinner_tick()).render(frame, header);

    frame.render_widget(Clear, body);
    if state.loading && state.articles.is_empty() {
        render_centered(frame, body, vec![Line::styled(
            "Loading news...",
            Style::default().fg(ACCENT),
        )]);
    } else if let (Some(error), true) = (&state.error, state.articles.is_empty()) {
        render_centered(
            frame,
            body,
            vec![
                Line::styled(error.clone(), Style::default().fg(STATUS_ERROR)),
                Line::from(""),
                Line::styled(RETRY_TEXT, Style::default().fg(ACCENT)),
            ],
        );
    } else {
        let mut lines = Vec::new();
        if let Some(error) = &state.error {
            lines.push(Line::styled(
                format!("{} (showing previous results)", error),
                Style::default().fg(STATUS_ERROR),
            ));
            lines.push(Line::from(""));
        }
        if view.items.is_empty() {
            lines.push(
                Line::styled(EMPTY_TEXT, Style::default().fg(MUTED_TEXT))
                    .alignment(Alignment::Center),
            );
        }
        let selected = app.selected_key();
        for item in &view.items {
            let highlighted = selected == Some(item.key().as_str());
            lines.extend(article_lines(item, highlighted));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
    }

    frame.render_widget(Footer::new(&view).widget(footer), footer);
}

fn article_lines<'a>(item: &PageItem<'a>, highlighted: bool) -> Vec<Line<'a>> {
    let article = item.article;
    let title_style = if highlighted {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![Line::styled(
        article.title.as_deref().unwrap_or("(untitled)"),
        title_style,
    )];
    if let Some(description) = article.description.as_deref() {
        lines.push(Line::styled(
            description,
            Style::default().fg(DESCRIPTION_TEXT),
        ));
    }
    let mut meta = Vec::new();
    if let Some(source) = article.source_name() {
        meta.push(Span::styled(
            source.to_uppercase(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(published) = article.published_at.as_deref() {
        meta.push(Span::styled(
            format!("  {}", published),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }
    lines.push(Line::from(""));
    lines
}

fn render_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>) {
    let height = (lines.len() as u16).min(area.height);
    let target = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        target,
    );
}
