//! Remote queries issued by the browser and their completions.
//!
//! `App` never awaits a query. It sends a `FetchCommand` down a channel; the
//! worker runs every command as its own tokio task and hands the
//! `FetchOutcome` back to the UI thread. Tasks are never cancelled, so
//! outcomes may arrive in any order.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::api::{Album, ApiError, Photo, RemoteSource, User};

/// Capacity of the command channel; one key press issues at most one command.
pub const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    Users,
    Albums { user_id: u64, generation: u64 },
    Photos { album_id: u64, generation: u64 },
}

#[derive(Debug)]
pub enum FetchOutcome {
    Users(Result<Vec<User>, ApiError>),
    Albums {
        user_id: u64,
        generation: u64,
        result: Result<Vec<Album>, ApiError>,
    },
    Photos {
        album_id: u64,
        generation: u64,
        result: Result<Vec<Photo>, ApiError>,
    },
}

pub type FetchSender = mpsc::Sender<FetchCommand>;
pub type FetchReceiver = mpsc::Receiver<FetchCommand>;

/// Callback that delivers a finished query to the UI thread.
pub type Deliver = Arc<dyn Fn(FetchOutcome) + Send + Sync>;

pub fn channel() -> (FetchSender, FetchReceiver) {
    mpsc::channel(COMMAND_BUFFER)
}

/// Run one command against `source`.
pub async fn execute(source: &dyn RemoteSource, command: FetchCommand) -> FetchOutcome {
    match command {
        FetchCommand::Users => FetchOutcome::Users(source.list_users().await),
        FetchCommand::Albums {
            user_id,
            generation,
        } => FetchOutcome::Albums {
            user_id,
            generation,
            result: source.list_albums(user_id).await,
        },
        FetchCommand::Photos {
            album_id,
            generation,
        } => FetchOutcome::Photos {
            album_id,
            generation,
            result: source.list_photos(album_id).await,
        },
    }
}

/// Spawn the worker that drains `commands` until every sender is dropped.
pub fn spawn_worker(
    handle: &Handle,
    source: Arc<dyn RemoteSource>,
    mut commands: FetchReceiver,
    deliver: Deliver,
) -> JoinHandle<()> {
    let spawner = handle.clone();
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            trace!(?command, "dispatching query");
            let source = Arc::clone(&source);
            let deliver = Arc::clone(&deliver);
            spawner.spawn(async move {
                let outcome = execute(source.as_ref(), command).await;
                deliver(outcome);
            });
        }
        trace!("fetch worker stopped");
    })
}
