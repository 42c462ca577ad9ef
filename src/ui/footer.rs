use crate::ui::pagination::PageView;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = "←/→: Page │ Ctrl+U: Clear │ Ctrl+R: Refresh │ Esc: Quit";

pub struct Footer {
    prev: Option<u32>,
    next: Option<u32>,
}

impl Footer {
    pub fn new(view: &PageView<'_>) -> Self {
        if !view.shows_controls() {
            return Self {
                prev: None,
                next: None,
            };
        }
        Self {
            prev: view.has_prev().then(|| view.current_page - 1),
            next: view.has_next().then(|| view.current_page + 1),
        }
    }

    /// Left and right pagination labels.
    pub fn labels(&self) -> (String, String) {
        (
            self.prev
                .map(|page| format!("← Page {}", page))
                .unwrap_or_default(),
            self.next
                .map(|page| format!("Page {} →", page))
                .unwrap_or_default(),
        )
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (prev, next) = self.labels();
        let version = format!("v{}", VERSION);
        let middle = format!("  {}  {}  ", HINTS, version);

        // Char count, not byte count, for the arrows and box-drawing chars
        let used = prev.chars().count() + middle.chars().count() + next.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used) / 2;

        let page_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(prev, page_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(middle, hint_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(next, page_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
