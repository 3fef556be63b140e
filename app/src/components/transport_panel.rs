//! Transport routes panel: route table, status switches, add-route form.

use dioxus::prelude::*;

use uniscape_types::models::{RoutePayload, TransportRoute};
use uniscape_types::{AdminCommand, Collection, LoadState, formatting};

use crate::api;
use crate::components::confirm::use_confirm;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::components::transport_editor::use_route_editor;
use crate::data::use_admin_data;

#[component]
pub fn TransportPanel() -> Element {
    let data = use_admin_data();
    let state = data.routes.read();

    rsx! {
        section { class: "panel", id: "transport-panel",
            div { class: "panel-header",
                h2 { "Transport Routes" }
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| data.load(Collection::Transport),
                    i { class: "fa-solid fa-rotate" }
                    " Refresh"
                }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Route" }
                        th { "Type" }
                        th { "Departure" }
                        th { "Price" }
                        th { "Capacity" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    match &*state {
                        LoadState::Loading => rsx! {
                            tr { td { colspan: 7, class: "row-info", "Loading routes..." } }
                        },
                        LoadState::Empty => rsx! {
                            tr { td { colspan: 7, class: "row-info", "No transport routes yet." } }
                        },
                        LoadState::Failed(message) => rsx! {
                            tr { td { colspan: 7, class: "row-error", "{message}" } }
                        },
                        LoadState::Loaded(routes) => rsx! {
                            for route in routes.clone() {
                                RouteRow { key: "{route.id}", route: route.clone() }
                            }
                        },
                    }
                }
            }
            AddRouteForm {}
        }
    }
}

#[component]
fn RouteRow(route: TransportRoute) -> Element {
    let data = use_admin_data();
    let toast = use_toast();
    let mut confirm = use_confirm();
    let mut editor = use_route_editor();

    let status = route.status;
    let toggle_id = route.id.clone();
    let edit_id = route.id.clone();
    let delete_id = route.id.clone();

    rsx! {
        tr {
            td { "{route.route_name}" }
            td { span { class: "kind-badge kind-{route.kind}", "{route.kind}" } }
            td { "{route.departure_time}" }
            td { "{formatting::format_rupees(route.price)}" }
            td { "{route.capacity}" }
            td {
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: status.is_active(),
                        onchange: move |_| {
                            data.toggle_route_status(toast, toggle_id.clone(), status)
                        },
                    }
                    span { class: "switch-label", "{status.label()}" }
                }
            }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| editor.open(edit_id.clone(), data, toast),
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |_| {
                        confirm.run(AdminCommand::DeleteRoute(delete_id.clone()), data, toast)
                    },
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn AddRouteForm() -> Element {
    let data = use_admin_data();
    let mut toast = use_toast();
    let mut route_name = use_signal(String::new);
    let mut kind = use_signal(|| "bus".to_string());
    let mut departure_time = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    rsx! {
        form {
            class: "panel-form",
            id: "add-route-form",
            onsubmit: move |e| {
                e.prevent_default();
                if *submitting.peek() {
                    return;
                }
                let name = route_name.peek().trim().to_string();
                let time = departure_time.peek().trim().to_string();
                if name.is_empty() || time.is_empty() {
                    toast.show("Please fill in all required fields.", ToastSeverity::Error);
                    return;
                }
                let (Ok(price_value), Ok(capacity_value)) = (
                    price.peek().trim().parse::<f64>(),
                    capacity.peek().trim().parse::<u32>(),
                ) else {
                    toast.show(
                        "Price and capacity must be valid numbers.",
                        ToastSeverity::Error,
                    );
                    return;
                };
                let payload = RoutePayload {
                    route_name: name,
                    kind: kind.peek().clone(),
                    departure_time: time,
                    price: price_value,
                    capacity: capacity_value,
                    password: data.credential(),
                };
                submitting.set(true);
                spawn(async move {
                    match api::create_route(&payload).await {
                        Ok(()) => {
                            toast.show("Route added", ToastSeverity::Success);
                            route_name.set(String::new());
                            departure_time.set(String::new());
                            price.set(String::new());
                            capacity.set(String::new());
                            data.load(Collection::Transport);
                        }
                        Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                    }
                    submitting.set(false);
                });
            },

            h3 { "Add Route" }
            div { class: "form-grid",
                input {
                    placeholder: "Route name",
                    value: "{route_name}",
                    oninput: move |e| route_name.set(e.value()),
                }
                select {
                    value: "{kind}",
                    onchange: move |e| kind.set(e.value()),
                    option { value: "bus", "Bus" }
                    option { value: "train", "Train" }
                    option { value: "flight", "Flight" }
                }
                input {
                    r#type: "time",
                    value: "{departure_time}",
                    oninput: move |e| departure_time.set(e.value()),
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Price",
                    value: "{price}",
                    oninput: move |e| price.set(e.value()),
                }
                input {
                    r#type: "number",
                    min: "1",
                    placeholder: "Capacity",
                    value: "{capacity}",
                    oninput: move |e| capacity.set(e.value()),
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: submitting(),
                if submitting() {
                    i { class: "fa-solid fa-spinner fa-spin" }
                    " Adding..."
                } else {
                    " Add Route"
                }
            }
        }
    }
}
