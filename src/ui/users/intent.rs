use crate::api::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// The users query was issued.
    Requested,
    /// The users query succeeded; replaces the list in full.
    Loaded { users: Vec<User> },
    /// The users query failed; the list is left as it was.
    Failed,
    /// User picked from the list. Overwrites any previous selection.
    Select { user_id: u64 },
}

impl Intent for UsersIntent {}
