use crate::api::{Album, Photo, User};
use crate::ui::albums::{AlbumSection, AlbumSectionState, AlbumsIntent, AlbumsReducer, SectionOptions};
use crate::ui::fetch::{FetchCommand, FetchOutcome, FetchSender};
use crate::ui::mvi::Reducer;
use crate::ui::users::{UsersIntent, UsersReducer, UsersState};
use serde::Serialize;
use tracing::{debug, warn};

/// Column that receives cursor keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Users,
    Albums,
    Photos,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    mounted: bool,
    options: SectionOptions,
    /// User list and user selection (MVI pattern).
    users: UsersState,
    /// Album and photo lists of the selected user (MVI pattern).
    albums: AlbumSectionState,
    user_cursor: usize,
    album_cursor: usize,
    photo_cursor: usize,
    fetch_sender: Option<FetchSender>,
}

/// Serializable view of what the browser currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserSnapshot {
    pub users: Vec<User>,
    pub selected_user_id: Option<u64>,
    pub albums: Option<Vec<Album>>,
    pub selected_album_id: Option<u64>,
    pub photos: Option<Vec<Photo>>,
}

impl App {
    pub fn new(options: SectionOptions) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Users,
            mounted: false,
            options,
            users: UsersState::default(),
            albums: AlbumSectionState::default(),
            user_cursor: 0,
            album_cursor: 0,
            photo_cursor: 0,
            fetch_sender: None,
        }
    }

    pub fn set_fetch_sender(&mut self, sender: FetchSender) {
        self.fetch_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn album_section(&self) -> Option<&AlbumSection> {
        self.albums.section()
    }

    pub fn user_cursor(&self) -> usize {
        self.user_cursor
    }

    pub fn album_cursor(&self) -> usize {
        self.album_cursor
    }

    pub fn photo_cursor(&self) -> usize {
        self.photo_cursor
    }

    /// Issue the users query. Only the first call has any effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.dispatch_users(UsersIntent::Requested);
        self.send_command(FetchCommand::Users);
    }

    /// Select a user and request their albums.
    ///
    /// Every call issues a new album query, including a repeat of the
    /// current selection.
    pub fn select_user(&mut self, user_id: u64) {
        let previous = self.users.selected_user_id;
        self.dispatch_users(UsersIntent::Select { user_id });
        self.dispatch_albums(AlbumsIntent::Mount {
            user_id,
            options: self.options,
        });
        if previous != Some(user_id) {
            self.album_cursor = 0;
        }

        let Some(section) = self.albums.section() else {
            return;
        };
        let command = FetchCommand::Albums {
            user_id,
            generation: section.albums_generation,
        };
        self.send_command(command);
    }

    /// Select an album of the mounted section and request its photos.
    pub fn select_album(&mut self, album_id: u64) {
        if !self.albums.is_mounted() {
            return;
        }
        self.dispatch_albums(AlbumsIntent::Select { album_id });
        self.photo_cursor = 0;

        let Some(section) = self.albums.section() else {
            return;
        };
        let command = FetchCommand::Photos {
            album_id,
            generation: section.photos_generation,
        };
        self.send_command(command);
    }

    /// Apply a finished query. Failures are logged and leave the lists as
    /// they were.
    pub fn on_fetched(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Users(Ok(users)) => {
                debug!(count = users.len(), "users loaded");
                self.dispatch_users(UsersIntent::Loaded { users });
                self.user_cursor = clamp(self.user_cursor, self.users.users.len());
            }
            FetchOutcome::Users(Err(err)) => {
                warn!(kind = err.kind(), error = %err, "users query failed");
                self.dispatch_users(UsersIntent::Failed);
            }
            FetchOutcome::Albums {
                user_id,
                generation,
                result: Ok(albums),
            } => {
                debug!(user_id, generation, count = albums.len(), "albums loaded");
                self.dispatch_albums(AlbumsIntent::AlbumsLoaded { generation, albums });
                let len = self.albums.section().map_or(0, |s| s.albums.len());
                self.album_cursor = clamp(self.album_cursor, len);
            }
            FetchOutcome::Albums {
                user_id,
                generation,
                result: Err(err),
            } => {
                warn!(user_id, generation, kind = err.kind(), error = %err, "albums query failed");
                self.dispatch_albums(AlbumsIntent::AlbumsFailed { generation });
            }
            FetchOutcome::Photos {
                album_id,
                generation,
                result: Ok(photos),
            } => {
                debug!(album_id, generation, count = photos.len(), "photos loaded");
                self.dispatch_albums(AlbumsIntent::PhotosLoaded { generation, photos });
                let len = self.albums.section().map_or(0, |s| s.photos.len());
                self.photo_cursor = clamp(self.photo_cursor, len);
            }
            FetchOutcome::Photos {
                album_id,
                generation,
                result: Err(err),
            } => {
                warn!(album_id, generation, kind = err.kind(), error = %err, "photos query failed");
                self.dispatch_albums(AlbumsIntent::PhotosFailed { generation });
            }
        }
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        let section = self.albums.section();
        BrowserSnapshot {
            users: self.users.users.clone(),
            selected_user_id: self.users.selected_user_id,
            albums: section.map(|s| s.albums.clone()),
            selected_album_id: section.and_then(|s| s.selected_album_id),
            photos: section
                .filter(|s| s.shows_photos())
                .map(|s| s.photos.clone()),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move the cursor of the focused column, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: i32) {
        let len = self.focused_len();
        let cursor = match self.focus {
            Focus::Users => &mut self.user_cursor,
            Focus::Albums => &mut self.album_cursor,
            Focus::Photos => &mut self.photo_cursor,
        };
        *cursor = step(*cursor, len, direction);
    }

    /// Select the item under the cursor and move focus one level down.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Users => {
                let Some(user_id) = self.users.users.get(self.user_cursor).map(|u| u.id) else {
                    return;
                };
                self.select_user(user_id);
                self.focus = Focus::Albums;
            }
            Focus::Albums => {
                let album_id = self
                    .albums
                    .section()
                    .and_then(|s| s.albums.get(self.album_cursor))
                    .map(|a| a.id);
                let Some(album_id) = album_id else {
                    return;
                };
                self.select_album(album_id);
                self.focus = Focus::Photos;
            }
            Focus::Photos => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Users if self.albums.is_mounted() => Focus::Albums,
            Focus::Albums if self.album_section().is_some_and(AlbumSection::shows_photos) => {
                Focus::Photos
            }
            other => other,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Photos => Focus::Albums,
            Focus::Albums | Focus::Users => Focus::Users,
        };
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    /// Dispatch an intent to the users reducer.
    pub fn dispatch_users(&mut self, intent: UsersIntent) {
        dispatch_mvi!(self, users, UsersReducer, intent);
    }

    /// Dispatch an intent to the album section reducer.
    pub fn dispatch_albums(&mut self, intent: AlbumsIntent) {
        dispatch_mvi!(self, albums, AlbumsReducer, intent);
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Users => self.users.users.len(),
            Focus::Albums => self.albums.section().map_or(0, |s| s.albums.len()),
            Focus::Photos => self.albums.section().map_or(0, |s| s.photos.len()),
        }
    }

    /// Queue a query. A query that cannot be queued never completes, so it is
    /// settled as a failure right away.
    fn send_command(&mut self, command: FetchCommand) {
        let Some(sender) = &self.fetch_sender else {
            warn!(?command, "no fetch worker attached; query dropped");
            self.abandon(command);
            return;
        };

        if let Err(err) = sender.try_send(command) {
            warn!(error = %err, "failed to queue query");
            self.abandon(err.into_inner());
        }
    }

    fn abandon(&mut self, command: FetchCommand) {
        match command {
            FetchCommand::Users => self.dispatch_users(UsersIntent::Failed),
            FetchCommand::Albums { generation, .. } => {
                self.dispatch_albums(AlbumsIntent::AlbumsFailed { generation })
            }
            FetchCommand::Photos { generation, .. } => {
                self.dispatch_albums(AlbumsIntent::PhotosFailed { generation })
            }
        }
    }
}

fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

fn step(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
