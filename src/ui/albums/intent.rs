use crate::api::{Album, Photo};
use crate::config::{BrowserConfig, StalePolicy};
use crate::ui::mvi::Intent;

/// Section behavior fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionOptions {
    pub stale_policy: StalePolicy,
    pub reset_selection_on_user_change: bool,
}

impl From<&BrowserConfig> for SectionOptions {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            stale_policy: config.stale_policy,
            reset_selection_on_user_change: config.reset_selection_on_user_change,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AlbumsIntent {
    /// A user was selected. Mounts the section on first use and starts a new
    /// album request generation every time.
    Mount { user_id: u64, options: SectionOptions },
    AlbumsLoaded { generation: u64, albums: Vec<Album> },
    AlbumsFailed { generation: u64 },
    /// An album was picked. Starts a new photo request generation.
    Select { album_id: u64 },
    PhotosLoaded { generation: u64, photos: Vec<Photo> },
    PhotosFailed { generation: u64 },
}

impl Intent for AlbumsIntent {}
