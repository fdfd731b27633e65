use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the focused column, version on the right.
pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Users => " ↑/↓: Move │ Enter: Show albums │ Tab: Next column │ q: Quit",
            Focus::Albums => " ↑/↓: Move │ Enter: Show photos │ Tab/Shift+Tab: Column │ q: Quit",
            Focus::Photos => " ↑/↓: Scroll │ Shift+Tab: Back to albums │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count; the hints contain multi-byte arrows.
        let used = hints.chars().count() + version.chars().count();
        let padding = usize::from(area.width.saturating_sub(2)).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(padding)),
            Span::raw(version),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_focus() {
        assert!(Footer::new(Focus::Users).hints().contains("Show albums"));
        assert!(Footer::new(Focus::Albums).hints().contains("Show photos"));
        assert!(!Footer::new(Focus::Photos).hints().contains("Enter"));
    }
}
