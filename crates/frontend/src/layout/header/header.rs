use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let user_label = move || {
        session.user.with(|u| {
            u.as_ref()
                .map(|u| {
                    let who = u.name.clone().or_else(|| u.email.clone()).unwrap_or_default();
                    format!("{} ({})", who, u.role.label())
                })
                .unwrap_or_default()
        })
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Taskup"</span>
            </div>
            <div class="header__actions">
                <span class="header__user">{user_label}</span>
                <button class="button button--ghost" on:click=move |_| session.sign_out()>"Logout"</button>
            </div>
        </header>
    }
}
