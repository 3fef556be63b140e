//! Refund requests awaiting an approve or deny decision.

use dioxus::prelude::*;

use uniscape_types::models::RefundRequest;
use uniscape_types::{AdminCommand, Collection, LoadState, formatting};

use crate::components::confirm::use_confirm;
use crate::components::toast::use_toast;
use crate::data::use_admin_data;

#[component]
pub fn RefundsPanel() -> Element {
    let data = use_admin_data();
    let state = data.refunds.read();

    rsx! {
        section { class: "panel", id: "refunds-panel",
            div { class: "panel-header",
                h2 { "Refund Requests" }
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| data.load(Collection::Refunds),
                    i { class: "fa-solid fa-rotate" }
                    " Refresh"
                }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Trip" }
                        th { "Amount" }
                        th { "Requested" }
                        th { "Actions" }
                    }
                }
                tbody {
                    match &*state {
                        LoadState::Loading => rsx! {
                            tr { td { colspan: 5, class: "row-info", "Loading refunds..." } }
                        },
                        LoadState::Empty => rsx! {
                            tr { td { colspan: 5, class: "row-info", "No refund requests." } }
                        },
                        LoadState::Failed(message) => rsx! {
                            tr { td { colspan: 5, class: "row-error", "{message}" } }
                        },
                        LoadState::Loaded(refunds) => rsx! {
                            for refund in refunds.clone() {
                                RefundRow { key: "{refund.id}", refund: refund.clone() }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn RefundRow(refund: RefundRequest) -> Element {
    let data = use_admin_data();
    let toast = use_toast();
    let mut confirm = use_confirm();

    let user = refund.user.clone().unwrap_or_default();
    let user_name = if user.name.is_empty() {
        "N/A".to_string()
    } else {
        user.name.clone()
    };
    let approve_id = refund.id.clone();
    let deny_id = refund.id.clone();

    rsx! {
        tr {
            td {
                span { class: "user-name", "{user_name}" }
                span { class: "user-handle", "{user.username}" }
            }
            td { "{refund.trip_destination}" }
            td { "{formatting::format_rupees(refund.amount)}" }
            td { "{formatting::format_datetime(&refund.requested_at)}" }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-success",
                    onclick: move |_| {
                        confirm.run(AdminCommand::ApproveRefund(approve_id.clone()), data, toast)
                    },
                    "Approve"
                }
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |_| {
                        confirm.run(AdminCommand::DenyRefund(deny_id.clone()), data, toast)
                    },
                    "Deny"
                }
            }
        }
    }
}
