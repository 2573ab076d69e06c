use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the loaded configuration to every page via context.
    provide_context(load_config());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
