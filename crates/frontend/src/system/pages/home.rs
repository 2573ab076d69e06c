use leptos::prelude::*;

use crate::layout::header::Header;
use crate::system::auth::context::use_session;

/// Landing page for active non-admin users.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session.user.with(|u| {
            let name = u
                .as_ref()
                .and_then(|u| u.name.clone().or_else(|| u.email.clone()))
                .unwrap_or_default();
            format!("Welcome to Taskup, {}", name)
        })
    };

    view! {
        <Header />
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{greeting}</h1>
            </div>
        </div>
    }
}
