//! Pending wallet top-ups awaiting approval.

use dioxus::prelude::*;

use uniscape_types::models::Transaction;
use uniscape_types::{AdminCommand, Collection, LoadState, formatting};

use crate::components::confirm::use_confirm;
use crate::components::toast::use_toast;
use crate::data::use_admin_data;

#[component]
pub fn TransactionsPanel() -> Element {
    let data = use_admin_data();
    let state = data.transactions.read();

    rsx! {
        section { class: "panel", id: "transactions-panel",
            div { class: "panel-header",
                h2 { "Pending Transactions" }
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| data.load(Collection::Transactions),
                    i { class: "fa-solid fa-rotate" }
                    " Refresh"
                }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Amount" }
                        th { "Method" }
                        th { "Requested" }
                        th { "Actions" }
                    }
                }
                tbody {
                    match &*state {
                        LoadState::Loading => rsx! {
                            tr { td { colspan: 5, class: "row-info", "Loading transactions..." } }
                        },
                        LoadState::Empty => rsx! {
                            tr { td { colspan: 5, class: "row-info", "No pending transactions." } }
                        },
                        LoadState::Failed(message) => rsx! {
                            tr { td { colspan: 5, class: "row-error", "{message}" } }
                        },
                        LoadState::Loaded(transactions) => rsx! {
                            for tx in transactions.clone() {
                                TransactionRow { key: "{tx.id}", tx: tx.clone() }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> Element {
    let data = use_admin_data();
    let toast = use_toast();
    let mut confirm = use_confirm();

    let user = tx.user.clone().unwrap_or_default();
    let user_name = if user.name.is_empty() {
        "N/A".to_string()
    } else {
        user.name.clone()
    };
    let approve_id = tx.id.clone();
    let deny_id = tx.id.clone();

    rsx! {
        tr {
            td {
                span { class: "user-name", "{user_name}" }
                span { class: "user-handle", "{user.username}" }
            }
            td { "{formatting::format_rupees(tx.amount)}" }
            td { span { class: "method-badge", "{tx.method.label()}" } }
            td { "{formatting::format_datetime(&tx.created_at)}" }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-success",
                    onclick: move |_| {
                        confirm.run(AdminCommand::ApproveTransaction(approve_id.clone()), data, toast)
                    },
                    "Approve"
                }
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |_| {
                        confirm.run(AdminCommand::DenyTransaction(deny_id.clone()), data, toast)
                    },
                    "Deny"
                }
            }
        }
    }
}
