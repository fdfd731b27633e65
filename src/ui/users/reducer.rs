use crate::ui::mvi::Reducer;

use super::intent::UsersIntent;
use super::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::Requested => UsersState {
                pending: true,
                ..state
            },
            UsersIntent::Loaded { users } => UsersState {
                users,
                pending: false,
                ..state
            },
            UsersIntent::Failed => UsersState {
                pending: false,
                ..state
            },
            UsersIntent::Select { user_id } => UsersState {
                selected_user_id: Some(user_id),
                ..state
            },
        }
    }
}
