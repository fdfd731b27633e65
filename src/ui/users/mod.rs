//! Top level of the drill-down: the user list and the user selection.

mod intent;
mod reducer;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::UsersState;
