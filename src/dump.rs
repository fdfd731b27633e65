//! Non-interactive mode: drive the same selection cascade without a
//! terminal and report the resulting state.

use crate::api::RemoteSource;
use crate::config::Config;
use crate::ui::albums::SectionOptions;
use crate::ui::app::{App, BrowserSnapshot};
use crate::ui::fetch::{self, FetchReceiver};

/// Which user and album to open after the users query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpRequest {
    pub user_id: Option<u64>,
    pub album_id: Option<u64>,
}

/// Run every queued query in issue order and apply the outcomes.
///
/// Returns the number of queries executed.
pub async fn settle(app: &mut App, commands: &mut FetchReceiver, source: &dyn RemoteSource) -> usize {
    let mut executed = 0;
    while let Ok(command) = commands.try_recv() {
        let outcome = fetch::execute(source, command).await;
        app.on_fetched(outcome);
        executed += 1;
    }
    executed
}

pub async fn run_dump(config: &Config, source: &dyn RemoteSource, request: DumpRequest) -> BrowserSnapshot {
    let (tx, mut rx) = fetch::channel();
    let mut app = App::new(SectionOptions::from(&config.browser));
    app.set_fetch_sender(tx);

    app.mount();
    settle(&mut app, &mut rx, source).await;

    if let Some(user_id) = request.user_id {
        app.select_user(user_id);
        settle(&mut app, &mut rx, source).await;

        if let Some(album_id) = request.album_id {
            app.select_album(album_id);
            settle(&mut app, &mut rx, source).await;
        }
    }

    app.snapshot()
}
