//! Second and third level of the drill-down: the albums of the selected user
//! and the photos of the selected album.

mod intent;
mod reducer;
mod state;

pub use intent::{AlbumsIntent, SectionOptions};
pub use reducer::AlbumsReducer;
pub use state::{AlbumSection, AlbumSectionState};
