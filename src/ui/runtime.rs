use crate::api::RemoteSource;
use crate::config::Config;
use crate::ui::albums::SectionOptions;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::{self, Deliver};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive browser until the user quits.
///
/// Queries run on `runtime`; this thread only renders and applies events.
pub fn run(config: &Config, source: Arc<dyn RemoteSource>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.browser.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (fetch_tx, fetch_rx) = fetch::channel();
    let event_tx = events.sender();
    let deliver: Deliver = Arc::new(move |outcome| {
        let _ = event_tx.send(AppEvent::Fetched(outcome));
    });
    let worker = fetch::spawn_worker(runtime, source, fetch_rx, deliver);

    let mut app = App::new(SectionOptions::from(&config.browser));
    app.set_fetch_sender(fetch_tx);
    app.mount();
    tracing::info!(base_url = %config.api.base_url, "browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Fetched(outcome)) => app.on_fetched(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Outstanding queries are abandoned, not awaited.
    worker.abort();
    drop(guard);
    tracing::info!("browser stopped");
    Ok(())
}
