//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod scripted_source;

use albumview::api::{Album, Photo, User};
use albumview::config::{ApiConfig, StalePolicy};
use albumview::ui::albums::SectionOptions;
use albumview::ui::app::App;
use albumview::ui::fetch::{self, FetchCommand, FetchReceiver};

pub use mock_api::{MockApi, MockResponse};
pub use scripted_source::ScriptedSource;

// -- App helpers --------------------------------------------------------------

pub fn options(policy: StalePolicy) -> SectionOptions {
    SectionOptions {
        stale_policy: policy,
        reset_selection_on_user_change: false,
    }
}

/// App wired to a command channel the test drains by hand.
pub fn make_app(policy: StalePolicy) -> (App, FetchReceiver) {
    let (tx, rx) = fetch::channel();
    let mut app = App::new(options(policy));
    app.set_fetch_sender(tx);
    (app, rx)
}

pub fn drain(rx: &mut FetchReceiver) -> Vec<FetchCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

// -- Fixtures -----------------------------------------------------------------

pub fn ada() -> User {
    User::new(1, "Ada")
}

pub fn trip() -> Album {
    Album::new(10, 1, "Trip")
}

pub fn dawn() -> Photo {
    Photo::new(100, 10, "Dawn", "http://x/1.jpg")
}
