use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::AdminUsersPage;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    AdminUsers,
    Home,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::AdminUsers => "/admin/users",
            AppRoute::Home => "/home",
        }
    }

    /// Unknown paths land on the login screen.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin/users" => AppRoute::AdminUsers,
            "/home" => AppRoute::Home,
            _ => AppRoute::Login,
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    move || match session.route.get() {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
        AppRoute::Home => view! {
            <RequireAuth>
                <HomePage />
            </RequireAuth>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [AppRoute::Login, AppRoute::AdminUsers, AppRoute::Home] {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_slash() {
        assert_eq!(AppRoute::from_path("/admin/users/"), AppRoute::AdminUsers);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Login);
    }
}
