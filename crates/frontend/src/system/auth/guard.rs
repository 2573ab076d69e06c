use leptos::prelude::*;

use super::context::use_session;

/// Component that requires a logged-in user
/// Shows fallback if nobody is logged in
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.user.with(|u| u.is_some())
            fallback=|| view! { <div class="alert alert--error">"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.user.with(|u| u.as_ref().map(|u| u.is_admin()).unwrap_or(false))
            fallback=|| view! { <div class="alert alert--error">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
