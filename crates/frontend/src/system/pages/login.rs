use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::notify::alert;
use crate::system::auth::api::HttpAuthGateway;
use crate::system::auth::context::use_session;
use crate::system::auth::form::{Field, FormState};
use crate::system::auth::submit::submit;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = StoredValue::new(
        use_context::<AppConfig>().expect("AppConfig not provided in context"),
    );
    let session = use_session();
    let form = RwSignal::new(FormState::default());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let mut prepared = None;
        form.update(|f| prepared = f.prepare_submission());
        let Some(submission) = prepared else {
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            let gateway = HttpAuthGateway::new(&config.get_value());
            let outcome = submit(&gateway, submission).await;

            form.update(|f| f.apply_outcome(&outcome));
            set_is_loading.set(false);

            if let Some(user) = outcome.user() {
                session.sign_in(user.clone());
            }
            if let Some(notice) = outcome.notice() {
                alert(notice);
            }
            if let Some(route) = outcome.route() {
                session.navigate(route);
            }
        });
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            f.set_value(Field::Role, value);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Welcome to Taskup"</h1>

                <form on:submit=on_submit>
                    <Show when=move || form.with(|f| f.mode.has_field(Field::Name))>
                        <TextField form=form field=Field::Name label="Enter name" />
                    </Show>
                    <TextField form=form field=Field::Email label="Enter email" />
                    <TextField form=form field=Field::Password label="Enter password" input_type="password" />

                    <div class="form-group">
                        <label for="role-select">"Select Role"</label>
                        <select
                            id="role-select"
                            name="role"
                            prop:value=move || form.with(|f| f.draft.value(Field::Role).to_string())
                            on:change=on_role_change
                            on:blur=move |_| form.update(|f| f.touch(Field::Role))
                            disabled=move || is_loading.get()
                        >
                            <option value="" disabled=true>"Select Role"</option>
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                        <FieldError form=form field=Field::Role />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || form.with(|f| f.mode.submit_label())}
                    </button>
                </form>

                <p
                    class="login-switch"
                    style="cursor: pointer; text-align: center;"
                    on:click=move |_| {
                        if !is_loading.get_untracked() {
                            form.update(|f| f.switch_mode());
                        }
                    }
                >
                    {move || form.with(|f| f.mode.switch_label())}
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    form: RwSignal<FormState>,
    field: Field,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let id = format!("login-{}", field.name());

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                id=id
                name=field.name()
                prop:value=move || form.with(|f| f.draft.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        f.set_value(field, value);
                    });
                }
                on:blur=move |_| form.update(|f| f.touch(field))
                class=("input--error", move || form.with(|f| f.visible_error(field).is_some()))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<FormState>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(field)).map(|message| {
            view! { <div class="field-error">{message}</div> }
        })
    }
}
