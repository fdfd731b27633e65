use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Album, Photo, User};

/// The three read-only collection queries the browser consumes.
///
/// Implementations must be idempotent and side-effect free on the server.
/// Filtering by owner happens server-side; results are returned in server
/// order and trusted as-is.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    async fn list_albums(&self, user_id: u64) -> Result<Vec<Album>, ApiError>;

    async fn list_photos(&self, album_id: u64) -> Result<Vec<Photo>, ApiError>;
}
