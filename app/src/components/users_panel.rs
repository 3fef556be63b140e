//! Registered users table with CSV export.

use dioxus::prelude::*;
use tracing::error;

use uniscape_types::{AdminCommand, Collection, LoadState, formatting};

use crate::api;
use crate::components::confirm::use_confirm;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::data::use_admin_data;

#[component]
pub fn UsersPanel() -> Element {
    let data = use_admin_data();
    let mut toast = use_toast();
    let mut confirm = use_confirm();
    let mut exporting = use_signal(|| false);

    let state = data.users.read();

    rsx! {
        section { class: "panel", id: "users-panel",
            div { class: "panel-header",
                h2 { "Users" }
                div { class: "panel-actions",
                    button {
                        class: "btn btn-sm btn-outline",
                        disabled: exporting(),
                        onclick: move |_| {
                            if *exporting.peek() {
                                return;
                            }
                            exporting.set(true);
                            spawn(async move {
                                if let Err(err) = api::download_users_csv(&data.credential()).await {
                                    error!("csv export failed: {err}");
                                    toast.show("Could not download file.", ToastSeverity::Error);
                                }
                                exporting.set(false);
                            });
                        },
                        if exporting() {
                            i { class: "fa-solid fa-spinner fa-spin" }
                            " Exporting..."
                        } else {
                            i { class: "fa-solid fa-file-csv" }
                            " Export CSV"
                        }
                    }
                    button {
                        class: "btn btn-sm btn-outline",
                        onclick: move |_| data.load(Collection::Users),
                        i { class: "fa-solid fa-rotate" }
                        " Refresh"
                    }
                }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Username" }
                        th { "Email" }
                        th { "SAP ID" }
                        th { "Wallet" }
                        th { "Actions" }
                    }
                }
                tbody {
                    match &*state {
                        LoadState::Loading => rsx! {
                            tr { td { colspan: 6, class: "row-info", "Loading users..." } }
                        },
                        LoadState::Empty => rsx! {
                            tr { td { colspan: 6, class: "row-info", "No registered users." } }
                        },
                        LoadState::Failed(message) => rsx! {
                            tr { td { colspan: 6, class: "row-error", "{message}" } }
                        },
                        LoadState::Loaded(users) => rsx! {
                            for user in users.iter() {
                                tr { key: "{user.id}",
                                    td { "{user.name}" }
                                    td { "{user.username}" }
                                    td { "{user.email}" }
                                    td { "{user.sap_id}" }
                                    td { "{formatting::format_rupees(user.wallet)}" }
                                    td {
                                        button {
                                            class: "btn btn-sm btn-danger",
                                            onclick: {
                                                let id = user.id.clone();
                                                move |_| {
                                                    confirm.run(
                                                        AdminCommand::DeleteUser(id.clone()),
                                                        data,
                                                        toast,
                                                    )
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
