mod actions;
mod state;

use contracts::system::users::UserRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::header::Header;
use crate::shared::config::AppConfig;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api::HttpUsersGateway;
use actions::RowAction;
use state::{create_state, UsersListState};

const TABLE_ID: &str = "admin-users-table";

/// Name, email, role and status cells of one row.
pub(crate) fn row_cells(user: &UserRecord) -> [&str; 4] {
    [
        user.name.as_str(),
        user.email.as_str(),
        user.role.label(),
        user.status.label(),
    ]
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <Header />
            <UsersList />
        </RequireAdmin>
    }
}

fn cell_text(
    state: RwSignal<UsersListState>,
    id: String,
    column: usize,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        state.with(|s| {
            s.find(&id)
                .map(|u| row_cells(u)[column].to_string())
                .unwrap_or_default()
        })
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let config = StoredValue::new(
        use_context::<AppConfig>().expect("AppConfig not provided in context"),
    );
    let state = create_state();

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        spawn_local(async move {
            let gateway = HttpUsersGateway::new(&config.get_value());
            let users = actions::load_users(&gateway).await;
            state.update(|s| s.set_items(users));
        });
    });

    let current = move |id: &str| state.with_untracked(|s| s.find(id).cloned());

    let toggle = move |id: String, action: RowAction| {
        let Some(user) = current(&id) else { return };
        spawn_local(async move {
            let gateway = HttpUsersGateway::new(&config.get_value());
            if let Some(patch) = actions::toggle(&gateway, &user, action).await {
                state.update(|s| {
                    s.apply_update(&user.id, &patch);
                });
            }
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            let gateway = HttpUsersGateway::new(&config.get_value());
            if actions::delete_user(&gateway, &id).await {
                state.update(|s| {
                    s.remove(&id);
                });
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"All Users"</h1>
                    <Badge>
                        {move || state.with(|s| s.items.len()).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let id = user.id;
                                    let name = cell_text(state, id.clone(), 0);
                                    let email = cell_text(state, id.clone(), 1);
                                    let role = cell_text(state, id.clone(), 2);
                                    let status = cell_text(state, id.clone(), 3);
                                    let (id_role, id_status) = (id.clone(), id.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {role}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| toggle(id_role.clone(), RowAction::ToggleRole)
                                                    >
                                                        "Edit Role"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| toggle(id_status.clone(), RowAction::ToggleStatus)
                                                    >
                                                        "Edit Status"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| delete(id.clone())
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
