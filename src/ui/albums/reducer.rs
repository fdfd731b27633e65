use crate::ui::mvi::Reducer;

use super::intent::AlbumsIntent;
use super::state::{AlbumSection, AlbumSectionState};

/// Reducer for the album section.
///
/// Issuing the queries is the caller's job: after `Mount` it reads
/// `albums_generation`, after `Select` it reads `photos_generation`, and tags
/// the request with that value.
pub struct AlbumsReducer;

impl Reducer for AlbumsReducer {
    type State = AlbumSectionState;
    type Intent = AlbumsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlbumsIntent::Mount { user_id, options } => {
                let mut section = match state {
                    AlbumSectionState::Unmounted => AlbumSection::new(user_id, options),
                    AlbumSectionState::Mounted(mut section) => {
                        section.options = options;
                        if options.reset_selection_on_user_change && section.user_id != user_id {
                            section.selected_album_id = None;
                            section.photos.clear();
                            // Outstanding photo responses belong to the old user.
                            section.photos_generation += 1;
                            section.photos_floor = section.photos_generation;
                            section.photos_pending = false;
                        }
                        section.user_id = user_id;
                        section
                    }
                };
                section.albums_generation += 1;
                section.albums_pending = true;
                AlbumSectionState::Mounted(section)
            }

            AlbumsIntent::AlbumsLoaded { generation, albums } => match state {
                AlbumSectionState::Mounted(mut section) => {
                    let current = section.albums_generation;
                    if section.accepts(generation, current) {
                        section.albums = albums;
                    }
                    if generation == current {
                        section.albums_pending = false;
                    }
                    AlbumSectionState::Mounted(section)
                }
                other => other,
            },

            AlbumsIntent::AlbumsFailed { generation } => match state {
                AlbumSectionState::Mounted(mut section) => {
                    if generation == section.albums_generation {
                        section.albums_pending = false;
                    }
                    AlbumSectionState::Mounted(section)
                }
                other => other,
            },

            AlbumsIntent::Select { album_id } => match state {
                AlbumSectionState::Mounted(mut section) => {
                    section.selected_album_id = Some(album_id);
                    section.photos_generation += 1;
                    section.photos_pending = true;
                    AlbumSectionState::Mounted(section)
                }
                other => other,
            },

            AlbumsIntent::PhotosLoaded { generation, photos } => match state {
                AlbumSectionState::Mounted(mut section) => {
                    let current = section.photos_generation;
                    if section.accepts_photos(generation) {
                        section.photos = photos;
                    }
                    if generation == current {
                        section.photos_pending = false;
                    }
                    AlbumSectionState::Mounted(section)
                }
                other => other,
            },

            AlbumsIntent::PhotosFailed { generation } => match state {
                AlbumSectionState::Mounted(mut section) => {
                    if generation == section.photos_generation {
                        section.photos_pending = false;
                    }
                    AlbumSectionState::Mounted(section)
                }
                other => other,
            },
        }
    }
}
