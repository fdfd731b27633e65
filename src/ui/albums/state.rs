use crate::api::{Album, Photo};
use crate::config::StalePolicy;
use crate::ui::mvi::UiState;

use super::intent::SectionOptions;

/// Album section lifecycle. There is no way back to `Unmounted`: a user
/// selection can be replaced but never cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlbumSectionState {
    #[default]
    Unmounted,
    Mounted(AlbumSection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumSection {
    /// Owner of the albums currently requested.
    pub user_id: u64,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    pub selected_album_id: Option<u64>,
    /// Bumped on every album query; responses carry the value they were issued with.
    pub albums_generation: u64,
    /// Bumped on every photo query.
    pub photos_generation: u64,
    /// Photo responses at or below this generation are dropped under every
    /// policy. Raised when a user change resets the album selection.
    pub photos_floor: u64,
    /// A query for the current album generation is outstanding.
    pub albums_pending: bool,
    /// A query for the current photo generation is outstanding.
    pub photos_pending: bool,
    pub options: SectionOptions,
}

impl UiState for AlbumSectionState {}

impl AlbumSectionState {
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted(_))
    }

    pub fn section(&self) -> Option<&AlbumSection> {
        match self {
            Self::Mounted(section) => Some(section),
            Self::Unmounted => None,
        }
    }
}

impl AlbumSection {
    pub(super) fn new(user_id: u64, options: SectionOptions) -> Self {
        Self {
            user_id,
            albums: Vec::new(),
            photos: Vec::new(),
            selected_album_id: None,
            albums_generation: 0,
            photos_generation: 0,
            photos_floor: 0,
            albums_pending: false,
            photos_pending: false,
            options,
        }
    }

    /// The photo grid is shown only while an album is selected.
    pub fn shows_photos(&self) -> bool {
        self.selected_album_id.is_some()
    }

    pub fn selected_album(&self) -> Option<&Album> {
        let id = self.selected_album_id?;
        self.albums.iter().find(|album| album.id == id)
    }

    /// Whether a response tagged `generation` may replace data whose latest
    /// request is `current`.
    pub(super) fn accepts(&self, generation: u64, current: u64) -> bool {
        match self.options.stale_policy {
            StalePolicy::Discard => generation == current,
            StalePolicy::LastArrival => true,
        }
    }

    /// Whether a photo response tagged `generation` may replace `photos`.
    pub(super) fn accepts_photos(&self, generation: u64) -> bool {
        generation > self.photos_floor && self.accepts(generation, self.photos_generation)
    }
}
