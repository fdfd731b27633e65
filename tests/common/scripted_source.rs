//! In-memory `RemoteSource` with scripted answers and a call log.

#![allow(dead_code)]

use albumview::api::{Album, ApiError, Photo, RemoteSource, User};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Users,
    Albums(u64),
    Photos(u64),
}

/// Each query answers with data or an HTTP status to fail with.
#[derive(Default)]
pub struct ScriptedSource {
    users: Mutex<Option<Result<Vec<User>, u16>>>,
    albums: Mutex<HashMap<u64, Result<Vec<Album>, u16>>>,
    photos: Mutex<HashMap<u64, Result<Vec<Photo>, u16>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock() = Some(Ok(users));
        self
    }

    pub fn failing_users(self, status: u16) -> Self {
        *self.users.lock() = Some(Err(status));
        self
    }

    pub fn with_albums(self, user_id: u64, albums: Vec<Album>) -> Self {
        self.albums.lock().insert(user_id, Ok(albums));
        self
    }

    pub fn failing_albums(self, user_id: u64, status: u16) -> Self {
        self.albums.lock().insert(user_id, Err(status));
        self
    }

    pub fn with_photos(self, album_id: u64, photos: Vec<Photo>) -> Self {
        self.photos.lock().insert(album_id, Ok(photos));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

fn answer<T: Clone>(entry: Option<&Result<Vec<T>, u16>>, url: String) -> Result<Vec<T>, ApiError> {
    match entry {
        Some(Ok(items)) => Ok(items.clone()),
        Some(Err(status)) => Err(ApiError::Status {
            url,
            status: *status,
        }),
        None => Err(ApiError::Status { url, status: 404 }),
    }
}

#[async_trait]
impl RemoteSource for ScriptedSource {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.calls.lock().push(Call::Users);
        answer(self.users.lock().as_ref(), "/users".to_string())
    }

    async fn list_albums(&self, user_id: u64) -> Result<Vec<Album>, ApiError> {
        self.calls.lock().push(Call::Albums(user_id));
        answer(
            self.albums.lock().get(&user_id),
            format!("/albums?userId={}", user_id),
        )
    }

    async fn list_photos(&self, album_id: u64) -> Result<Vec<Photo>, ApiError> {
        self.calls.lock().push(Call::Photos(album_id));
        answer(
            self.photos.lock().get(&album_id),
            format!("/photos?albumId={}", album_id),
        )
    }
}
