//! Admin actions on the user list. Each issues one backend call and reports
//! what, if anything, should change in the local list. Failures are logged
//! and otherwise absorbed.

use contracts::system::users::{UpdateUserDto, UserRecord};

use crate::system::users::api::UsersGateway;

pub async fn load_users<G>(gateway: &G) -> Vec<UserRecord>
where
    G: UsersGateway + ?Sized,
{
    match gateway.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            log::error!("Error fetching users: {}", e);
            Vec::new()
        }
    }
}

/// Flip user⇄admin. Returns the applied patch on success.
pub async fn toggle_role<G>(gateway: &G, user: &UserRecord) -> Option<UpdateUserDto>
where
    G: UsersGateway + ?Sized,
{
    let new_role = user.role.toggled();
    let dto = UpdateUserDto::role(new_role);
    match gateway.update_user(&user.id, &dto).await {
        Ok(()) => {
            log::info!(
                "Successfully toggled user role for ID {} to {}",
                user.id,
                new_role.as_str()
            );
            Some(dto)
        }
        Err(e) => {
            log::error!("Error toggling user role for ID {}: {}", user.id, e);
            None
        }
    }
}

/// Flip active⇄inactive. Returns the applied patch on success.
pub async fn toggle_status<G>(gateway: &G, user: &UserRecord) -> Option<UpdateUserDto>
where
    G: UsersGateway + ?Sized,
{
    let new_status = user.status.toggled();
    let dto = UpdateUserDto::status(new_status);
    match gateway.update_user(&user.id, &dto).await {
        Ok(()) => {
            log::info!(
                "Successfully toggled user status for ID {} to {}",
                user.id,
                new_status.as_str()
            );
            Some(dto)
        }
        Err(e) => {
            log::error!("Error toggling user status for ID {}: {}", user.id, e);
            None
        }
    }
}

/// Per-row toggle buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleRole,
    ToggleStatus,
}

pub async fn toggle<G>(gateway: &G, user: &UserRecord, action: RowAction) -> Option<UpdateUserDto>
where
    G: UsersGateway + ?Sized,
{
    match action {
        RowAction::ToggleRole => toggle_role(gateway, user).await,
        RowAction::ToggleStatus => toggle_status(gateway, user).await,
    }
}

/// Returns true when the backend confirmed the deletion.
pub async fn delete_user<G>(gateway: &G, id: &str) -> bool
where
    G: UsersGateway + ?Sized,
{
    match gateway.delete_user(id).await {
        Ok(()) => {
            log::info!("Successfully deleted user with ID: {}", id);
            true
        }
        Err(e) => {
            log::error!("Error deleting user with ID {}: {}", id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ApiError;
    use crate::system::users::ui::list::row_cells;
    use crate::system::users::ui::list::state::UsersListState;
    use async_trait::async_trait;
    use contracts::system::users::{Role, UserStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Put(String, serde_json::Value),
        Delete(String),
    }

    #[derive(Default)]
    struct MockUsers {
        users: Vec<UserRecord>,
        fail_with: Option<ApiError>,
        calls: RefCell<Vec<Call>>,
    }

    impl MockUsers {
        fn result(&self) -> Result<(), ApiError> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl UsersGateway for MockUsers {
        async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            self.result().map(|_| self.users.clone())
        }

        async fn update_user(&self, id: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
            let body = serde_json::to_value(dto).unwrap();
            self.calls.borrow_mut().push(Call::Put(id.to_string(), body));
            self.result()
        }

        async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.result()
        }
    }

    fn record(id: &str, role: Role, status: UserStatus) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: format!("User {id}"),
            email: format!("{id}@taskup.dev"),
            role,
            status,
        }
    }

    fn seeded() -> MockUsers {
        MockUsers {
            users: vec![
                record("u1", Role::User, UserStatus::Active),
                record("u2", Role::Admin, UserStatus::Inactive),
                record("u3", Role::User, UserStatus::Inactive),
            ],
            ..Default::default()
        }
    }

    fn loaded(gateway: &MockUsers) -> UsersListState {
        let mut state = UsersListState::default();
        state.set_items(block_on(load_users(gateway)));
        state
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: String::new(),
        }
    }

    #[test]
    fn test_list_renders_one_row_per_record() {
        let gateway = seeded();
        let state = loaded(&gateway);

        assert_eq!(state.items.len(), 3);
        assert_eq!(
            row_cells(&state.items[1]),
            ["User u2", "u2@taskup.dev", "Admin", "Inactive"]
        );
        assert_eq!(*gateway.calls.borrow(), vec![Call::List]);
    }

    #[test]
    fn test_failed_fetch_leaves_empty_list() {
        let gateway = MockUsers {
            fail_with: Some(ApiError::Transport("offline".to_string())),
            ..seeded()
        };
        let state = loaded(&gateway);
        assert!(state.items.is_empty());
        assert!(state.is_loaded);
    }

    #[test]
    fn test_toggle_role_sends_one_put_and_updates_row() {
        let gateway = seeded();
        let mut state = loaded(&gateway);
        let target = state.items[0].clone();

        let patch = block_on(toggle_role(&gateway, &target)).unwrap();
        state.apply_update(&target.id, &patch);

        let calls = gateway.calls.borrow();
        assert_eq!(
            calls[1..],
            [Call::Put("u1".to_string(), serde_json::json!({ "role": "admin" }))]
        );
        assert_eq!(row_cells(&state.items[0])[2], "Admin");
        assert_eq!(calls.iter().filter(|c| **c == Call::List).count(), 1);
    }

    #[test]
    fn test_toggle_status_is_symmetric() {
        let gateway = seeded();
        let mut state = loaded(&gateway);

        let active = state.items[0].clone();
        let patch = block_on(toggle_status(&gateway, &active)).unwrap();
        state.apply_update(&active.id, &patch);

        let inactive = state.items[2].clone();
        let patch = block_on(toggle_status(&gateway, &inactive)).unwrap();
        state.apply_update(&inactive.id, &patch);

        assert_eq!(
            gateway.calls.borrow()[1..],
            [
                Call::Put("u1".to_string(), serde_json::json!({ "status": "inactive" })),
                Call::Put("u3".to_string(), serde_json::json!({ "status": "active" })),
            ]
        );
        assert_eq!(state.items[0].status, UserStatus::Inactive);
        assert_eq!(state.items[2].status, UserStatus::Active);
        assert_eq!(state.items[1].status, UserStatus::Inactive);
    }

    #[test]
    fn test_row_action_picks_the_field() {
        let gateway = seeded();
        let mut state = loaded(&gateway);
        let admin = state.items[1].clone();

        let patch = block_on(toggle(&gateway, &admin, RowAction::ToggleRole)).unwrap();
        state.apply_update(&admin.id, &patch);
        let patch = block_on(toggle(&gateway, &admin, RowAction::ToggleStatus)).unwrap();
        state.apply_update(&admin.id, &patch);

        assert_eq!(
            gateway.calls.borrow()[1..],
            [
                Call::Put("u2".to_string(), serde_json::json!({ "role": "user" })),
                Call::Put("u2".to_string(), serde_json::json!({ "status": "active" })),
            ]
        );
        assert_eq!(row_cells(&state.items[1]), ["User u2", "u2@taskup.dev", "User", "Active"]);
    }

    #[test]
    fn test_failed_toggle_leaves_state_unchanged() {
        let gateway = seeded();
        let state = loaded(&gateway);
        let failing = MockUsers {
            fail_with: Some(server_error()),
            ..Default::default()
        };

        assert_eq!(block_on(toggle_role(&failing, &state.items[0])), None);
        assert_eq!(block_on(toggle_status(&failing, &state.items[0])), None);
        assert_eq!(state.items, gateway.users);
    }

    #[test]
    fn test_delete_removes_row_on_success() {
        let gateway = seeded();
        let mut state = loaded(&gateway);

        if block_on(delete_user(&gateway, "u2")) {
            state.remove("u2");
        }

        assert_eq!(gateway.calls.borrow()[1..], [Call::Delete("u2".to_string())]);
        assert_eq!(state.items.len(), 2);
        assert!(state.find("u2").is_none());
    }

    #[test]
    fn test_delete_keeps_row_on_failure() {
        let gateway = MockUsers {
            fail_with: Some(server_error()),
            ..seeded()
        };
        let mut state = UsersListState::default();
        state.set_items(gateway.users.clone());

        if block_on(delete_user(&gateway, "u2")) {
            state.remove("u2");
        }

        assert_eq!(*gateway.calls.borrow(), vec![Call::Delete("u2".to_string())]);
        assert!(state.find("u2").is_some());
    }
}
