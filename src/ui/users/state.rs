use crate::api::User;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    /// Users in response order.
    pub users: Vec<User>,
    pub selected_user_id: Option<u64>,
    /// True while the users query is outstanding.
    pub pending: bool,
}

impl UiState for UsersState {}

impl UsersState {
    /// The album section is shown only once a user has been picked.
    pub fn shows_albums(&self) -> bool {
        self.selected_user_id.is_some()
    }

    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected_user_id?;
        self.users.iter().find(|user| user.id == id)
    }
}
