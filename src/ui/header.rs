use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the current drill-down path.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let muted_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "albumview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        for crumb in breadcrumb(app) {
            spans.push(Span::styled("  ›  ", separator_style));
            spans.push(Span::styled(crumb, text_style));
        }

        if is_loading(app) {
            spans.push(Span::styled("  …", muted_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels for the selected user and album, in hierarchy order.
pub fn breadcrumb(app: &App) -> Vec<String> {
    let mut crumbs = Vec::new();
    let users = app.users();
    let Some(user_id) = users.selected_user_id else {
        return crumbs;
    };
    crumbs.push(match users.selected_user() {
        Some(user) => user.name.clone(),
        None => format!("User #{}", user_id),
    });

    let Some(section) = app.album_section() else {
        return crumbs;
    };
    if let Some(album_id) = section.selected_album_id {
        crumbs.push(match section.selected_album() {
            Some(album) => album.title.clone(),
            None => format!("Album #{}", album_id),
        });
    }
    crumbs
}

fn is_loading(app: &App) -> bool {
    app.users().pending
        || app
            .album_section()
            .is_some_and(|s| s.albums_pending || s.photos_pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Album, User};
    use crate::ui::albums::SectionOptions;
    use crate::ui::fetch::FetchOutcome;

    #[test]
    fn breadcrumb_empty_without_selection() {
        let app = App::new(SectionOptions::default());
        assert!(breadcrumb(&app).is_empty());
    }

    #[test]
    fn breadcrumb_uses_names_when_known() {
        let mut app = App::new(SectionOptions::default());
        app.on_fetched(FetchOutcome::Users(Ok(vec![User::new(1, "Ada")])));
        app.select_user(1);
        app.on_fetched(FetchOutcome::Albums {
            user_id: 1,
            generation: 1,
            result: Ok(vec![Album::new(10, 1, "Trip")]),
        });
        app.select_album(10);
        assert_eq!(breadcrumb(&app), vec!["Ada".to_string(), "Trip".to_string()]);
    }

    #[test]
    fn breadcrumb_falls_back_to_ids() {
        let mut app = App::new(SectionOptions::default());
        app.select_user(9);
        app.select_album(90);
        assert_eq!(
            breadcrumb(&app),
            vec!["User #9".to_string(), "Album #90".to_string()]
        );
    }
}
