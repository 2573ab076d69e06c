use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use crate::routes::routes::AppRoute;

/// Logged-in user and current screen, shared through context.
#[derive(Clone, Copy)]
pub struct AppSession {
    pub user: RwSignal<Option<SessionUser>>,
    pub route: RwSignal<AppRoute>,
}

impl AppSession {
    pub fn new(route: AppRoute) -> Self {
        Self {
            user: RwSignal::new(None),
            route: RwSignal::new(route),
        }
    }

    pub fn sign_in(&self, user: SessionUser) {
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        self.user.set(None);
        self.navigate(AppRoute::Login);
    }

    /// Switch screens and mirror the path in the address bar.
    /// Replaces the current history entry; there is no popstate handling.
    pub fn navigate(&self, route: AppRoute) {
        log::info!("Navigating to {}", route.path());
        if let Some(w) = web_sys::window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(route.path()),
                );
            }
        }
        self.route.set(route);
    }
}

/// Session provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    provide_context(AppSession::new(AppRoute::from_path(&pathname)));

    children()
}

/// Hook to access the session
pub fn use_session() -> AppSession {
    use_context::<AppSession>().expect("AuthProvider not found in component tree")
}
