use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, SELECTED};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let [users_area, albums_area, photos_area] = body_columns(body);
    draw_users(frame, app, users_area);
    draw_albums(frame, app, albums_area);
    draw_photos(frame, app, photos_area);

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);
}

fn draw_users(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let users = app.users();
    let title = column_title("Users", users.pending);
    let block = column_block(title, app.focus() == Focus::Users);

    if users.users.is_empty() {
        let text = if users.pending { "Loading…" } else { "No users." };
        frame.render_widget(placeholder(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = users
        .users
        .iter()
        .map(|user| marked_item(&user.name, users.selected_user_id == Some(user.id)))
        .collect();
    render_list(frame, area, block, items, app.user_cursor(), app.focus() == Focus::Users);
}

fn draw_albums(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(section) = app.album_section() else {
        let block = column_block(column_title("Albums", false), false);
        frame.render_widget(placeholder("Select a user to see albums.").block(block), area);
        return;
    };

    let focused = app.focus() == Focus::Albums;
    let block = column_block(column_title("Albums", section.albums_pending), focused);
    if section.albums.is_empty() {
        let text = if section.albums_pending { "Loading…" } else { "No albums." };
        frame.render_widget(placeholder(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = section
        .albums
        .iter()
        .map(|album| marked_item(&album.title, section.selected_album_id == Some(album.id)))
        .collect();
    render_list(frame, area, block, items, app.album_cursor(), focused);
}

fn draw_photos(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let section = app.album_section().filter(|s| s.shows_photos());
    let Some(section) = section else {
        let block = column_block(column_title("Photos", false), false);
        frame.render_widget(placeholder("Select an album to see photos.").block(block), area);
        return;
    };

    let focused = app.focus() == Focus::Photos;
    let block = column_block(column_title("Photos", section.photos_pending), focused);
    if section.photos.is_empty() {
        let text = if section.photos_pending { "Loading…" } else { "No photos." };
        frame.render_widget(placeholder(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = section
        .photos
        .iter()
        .map(|photo| {
            ListItem::new(vec![
                Line::from(photo.title.clone()),
                Line::from(Span::styled(
                    format!("  {}", photo.thumbnail_url),
                    Style::default().fg(MUTED_TEXT),
                )),
            ])
        })
        .collect();
    render_list(frame, area, block, items, app.photo_cursor(), focused);
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'static>,
    items: Vec<ListItem<'static>>,
    cursor: usize,
    focused: bool,
) {
    let highlight = if focused {
        Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(ACTIVE_HIGHLIGHT)
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// List row; the selected entry carries a marker so it stays visible when
/// the cursor moves away.
fn marked_item(label: &str, selected: bool) -> ListItem<'static> {
    if selected {
        ListItem::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(SELECTED)),
            Span::styled(label.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]))
    } else {
        ListItem::new(Line::from(format!("  {}", label)))
    }
}

fn column_title(name: &str, pending: bool) -> String {
    if pending {
        format!(" {} … ", name)
    } else {
        format!(" {} ", name)
    }
}

fn column_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn placeholder(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Album, Photo, User};
    use crate::ui::albums::SectionOptions;
    use crate::ui::fetch::FetchOutcome;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_app_shows_placeholders() {
        let app = App::new(SectionOptions::default());
        let screen = rendered(&app);
        assert!(screen.contains("No users."));
        assert!(screen.contains("Select a user to see albums."));
        assert!(screen.contains("Select an album to see photos."));
    }

    #[test]
    fn full_drill_down_is_rendered() {
        let mut app = App::new(SectionOptions::default());
        app.on_fetched(FetchOutcome::Users(Ok(vec![User::new(1, "Ada")])));
        app.select_user(1);
        app.on_fetched(FetchOutcome::Albums {
            user_id: 1,
            generation: 1,
            result: Ok(vec![Album::new(10, 1, "Trip")]),
        });
        app.select_album(10);
        app.on_fetched(FetchOutcome::Photos {
            album_id: 10,
            generation: 1,
            result: Ok(vec![Photo::new(100, 10, "Dawn", "http://x/1.jpg")]),
        });

        let screen = rendered(&app);
        assert!(screen.contains("Ada"));
        assert!(screen.contains("Trip"));
        assert!(screen.contains("Dawn"));
        assert!(screen.contains("http://x/1.jpg"));
    }

    #[test]
    fn pending_album_query_shows_loading() {
        let (tx, _rx) = crate::ui::fetch::channel();
        let mut app = App::new(SectionOptions::default());
        app.set_fetch_sender(tx);
        app.select_user(3);
        let screen = rendered(&app);
        assert!(screen.contains("Loading…"));
    }
}
