use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const PLACEHOLDER: &str = "Search articles...";

pub struct Header<'a> {
    draft: &'a str,
    loading: bool,
    spinner_tick: usize,
}

impl<'a> Header<'a> {
    pub fn new(draft: &'a str, loading: bool, spinner_tick: usize) -> Self {
        Self {
            draft,
            loading,
            spinner_tick,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }
        let title_area = Rect { height: 1, ..area };
        let search_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        frame.render_widget(self.title(), title_area);
        if search_area.height > 0 {
            frame.render_widget(self.search_box(), search_area);
        }
    }

    fn title(&self) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(
            "News Home",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )];
        if self.loading {
            let frame = SPINNER[self.spinner_tick % SPINNER.len()];
            spans.push(Span::styled(
                format!("  {} loading", frame),
                Style::default().fg(ACCENT),
            ));
        }
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn search_box(&self) -> Paragraph<'a> {
        let line = if self.draft.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT)))
        } else {
            Line::from(vec![
                Span::styled(self.draft, Style::default().fg(HEADER_TEXT)),
                Span::styled("▏", Style::default().fg(ACCENT)),
            ])
        };
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
