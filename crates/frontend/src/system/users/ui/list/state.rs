use contracts::system::users::{UpdateUserDto, UserRecord};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub items: Vec<UserRecord>,
    pub is_loaded: bool,
}

impl UsersListState {
    pub fn set_items(&mut self, items: Vec<UserRecord>) {
        self.items = items;
        self.is_loaded = true;
    }

    /// Apply a successful partial update to the matching record.
    /// Returns false when no record has that id.
    pub fn apply_update(&mut self, id: &str, dto: &UpdateUserDto) -> bool {
        let Some(user) = self.items.iter_mut().find(|u| u.id == id) else {
            return false;
        };
        if let Some(role) = dto.role {
            user.role = role;
        }
        if let Some(status) = dto.status {
            user.status = status;
        }
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|u| u.id != id);
        self.items.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.items.iter().find(|u| u.id == id)
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::{Role, UserStatus};

    fn user(id: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: format!("name-{id}"),
            email: format!("{id}@taskup.dev"),
            role: Role::User,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_apply_update_touches_only_matching_record() {
        let mut state = UsersListState::default();
        state.set_items(vec![user("a"), user("b")]);

        assert!(state.apply_update("b", &UpdateUserDto::role(Role::Admin)));
        assert_eq!(state.items[0].role, Role::User);
        assert_eq!(state.items[1].role, Role::Admin);
        assert_eq!(state.items[1].status, UserStatus::Active);
    }

    #[test]
    fn test_apply_update_unknown_id() {
        let mut state = UsersListState::default();
        state.set_items(vec![user("a")]);
        assert!(!state.apply_update("zzz", &UpdateUserDto::status(UserStatus::Inactive)));
        assert_eq!(state.items[0], user("a"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = UsersListState::default();
        state.set_items(vec![user("a"), user("b"), user("c")]);
        assert!(state.remove("b"));
        let ids: Vec<_> = state.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(!state.remove("b"));
    }
}
