use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.activate(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.focus_prev(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;
    use crate::ui::albums::SectionOptions;
    use crate::ui::app::Focus;
    use crate::ui::fetch::{self, FetchCommand, FetchOutcome};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(SectionOptions::default());
        handle_key(&mut app, press(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(SectionOptions::default());
        let mut key = press(KeyCode::Esc, KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn enter_selects_highlighted_user() {
        let (tx, mut rx) = fetch::channel();
        let mut app = App::new(SectionOptions::default());
        app.set_fetch_sender(tx);
        app.on_fetched(FetchOutcome::Users(Ok(vec![User::new(1, "Ada"), User::new(2, "Bob")])));

        handle_key(&mut app, press(KeyCode::Char('j'), KeyModifiers::empty()));
        handle_key(&mut app, press(KeyCode::Enter, KeyModifiers::empty()));

        assert_eq!(app.users().selected_user_id, Some(2));
        assert_eq!(app.focus(), Focus::Albums);
        assert_eq!(
            rx.try_recv().ok(),
            Some(FetchCommand::Albums { user_id: 2, generation: 1 })
        );
    }
}
