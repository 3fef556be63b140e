//! Trips panel: collection table, optimistic status switches, and the
//! add-trip form with its variable-length payment breakdown editor.

use dioxus::prelude::*;

use uniscape_types::models::{PaymentDetail, Trip};
use uniscape_types::payment::{encode_payment_details, payment_total};
use uniscape_types::{AdminCommand, Collection, LoadState, formatting};

use crate::api;
use crate::browser;
use crate::components::bookings_modal::use_bookings;
use crate::components::confirm::use_confirm;
use crate::components::toast::{ToastManager, ToastSeverity, use_toast};
use crate::components::trip_editor::use_trip_editor;
use crate::data::{AdminData, use_admin_data};

#[component]
pub fn TripsPanel() -> Element {
    let data = use_admin_data();
    let state = data.trips.read();

    rsx! {
        section { class: "panel", id: "trips-panel",
            div { class: "panel-header",
                h2 { "Trips" }
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| data.load(Collection::Trips),
                    i { class: "fa-solid fa-rotate" }
                    " Refresh"
                }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "" }
                        th { "Destination" }
                        th { "Date" }
                        th { "Price" }
                        th { "Bookings" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    match &*state {
                        LoadState::Loading => rsx! {
                            tr { td { colspan: 7, class: "row-info", "Loading trips..." } }
                        },
                        LoadState::Empty => rsx! {
                            tr { td { colspan: 7, class: "row-info", "No trips yet." } }
                        },
                        LoadState::Failed(message) => rsx! {
                            tr { td { colspan: 7, class: "row-error", "{message}" } }
                        },
                        LoadState::Loaded(trips) => rsx! {
                            for trip in trips.clone() {
                                TripRow { key: "{trip.id}", trip: trip.clone() }
                            }
                        },
                    }
                }
            }
            AddTripForm {}
        }
    }
}

#[component]
fn TripRow(trip: Trip) -> Element {
    let data = use_admin_data();
    let toast = use_toast();
    let mut confirm = use_confirm();
    let mut editor = use_trip_editor();
    let mut bookings = use_bookings();

    let status = trip.status;
    let toggle_id = trip.id.clone();
    let edit_id = trip.id.clone();
    let delete_id = trip.id.clone();
    let bookings_id = trip.id.clone();
    let bookings_name = trip.destination.clone();
    let image_url = api::media_url(&trip.image);

    rsx! {
        tr {
            td {
                if image_url.is_empty() {
                    span { class: "trip-thumb trip-thumb-missing" }
                } else {
                    img {
                        class: "trip-thumb",
                        src: "{image_url}",
                        alt: "{trip.destination}",
                    }
                }
            }
            td { "{trip.destination}" }
            td { "{formatting::format_date(&trip.date)}" }
            td {
                span { class: "price-sale", "{formatting::format_rupees(trip.sale_price)}" }
                span { class: "price-original", "{formatting::format_rupees(trip.original_price)}" }
            }
            td { "{trip.current_bookings} / {trip.max_participants}" }
            td {
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: status.is_active(),
                        onchange: move |_| {
                            data.toggle_trip_status(toast, toggle_id.clone(), status)
                        },
                    }
                    span { class: "switch-label", "{status.label()}" }
                }
            }
            td { class: "row-actions",
                button {
                    class: "btn btn-sm btn-info",
                    onclick: move |_| bookings.open(bookings_id.clone(), bookings_name.clone(), data),
                    "Bookings"
                }
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| editor.open(edit_id.clone(), toast),
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |_| {
                        confirm.run(AdminCommand::DeleteTrip(delete_id.clone()), data, toast)
                    },
                    "Delete"
                }
            }
        }
    }
}

/// Shared row editor for the payment breakdown, used by the add form and
/// the edit modal. Rows keep entry order; the running total tracks every
/// keystroke.
#[component]
pub fn PaymentRowsEditor(mut rows: Signal<Vec<PaymentDetail>>) -> Element {
    let total = payment_total(&rows.read());

    rsx! {
        div { class: "line-items",
            h4 { "Payment Breakdown" }
            for (index, row) in rows.read().iter().cloned().enumerate() {
                div { class: "line-item-row", key: "{index}",
                    input {
                        placeholder: "Description",
                        value: "{row.description}",
                        oninput: move |e| {
                            if let Some(item) = rows.write().get_mut(index) {
                                item.description = e.value();
                            }
                        },
                    }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{row.price}",
                        oninput: move |e| {
                            if let Some(item) = rows.write().get_mut(index) {
                                item.price = e.value().parse().unwrap_or(0.0);
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-danger",
                        onclick: move |_| {
                            rows.write().remove(index);
                        },
                        "Remove"
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn btn-sm btn-outline",
                onclick: move |_| {
                    rows.write().push(PaymentDetail {
                        description: String::new(),
                        price: 0.0,
                    });
                },
                "Add line item"
            }
            p { class: "line-items-total", "Total: {formatting::format_rupees(total)}" }
        }
    }
}

#[component]
fn AddTripForm() -> Element {
    let data = use_admin_data();
    let toast = use_toast();
    let destination = use_signal(String::new);
    let date = use_signal(String::new);
    let original_price = use_signal(String::new);
    let sale_price = use_signal(String::new);
    let max_participants = use_signal(String::new);
    let rows = use_signal(Vec::<PaymentDetail>::new);
    let submitting = use_signal(|| false);

    rsx! {
        form {
            class: "panel-form",
            id: "add-trip-form",
            onsubmit: move |e| {
                e.prevent_default();
                submit_add_trip(
                    data,
                    toast,
                    destination,
                    date,
                    original_price,
                    sale_price,
                    max_participants,
                    rows,
                    submitting,
                );
            },

            h3 { "Add Trip" }
            div { class: "form-grid",
                input {
                    placeholder: "Destination",
                    value: "{destination}",
                    oninput: {
                        let mut destination = destination;
                        move |e| destination.set(e.value())
                    },
                }
                input {
                    r#type: "date",
                    value: "{date}",
                    oninput: {
                        let mut date = date;
                        move |e| date.set(e.value())
                    },
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Original price",
                    value: "{original_price}",
                    oninput: {
                        let mut original_price = original_price;
                        move |e| original_price.set(e.value())
                    },
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Sale price",
                    value: "{sale_price}",
                    oninput: {
                        let mut sale_price = sale_price;
                        move |e| sale_price.set(e.value())
                    },
                }
                input {
                    r#type: "number",
                    min: "1",
                    placeholder: "Max participants",
                    value: "{max_participants}",
                    oninput: {
                        let mut max_participants = max_participants;
                        move |e| max_participants.set(e.value())
                    },
                }
                input {
                    id: "trip-image",
                    r#type: "file",
                    accept: "image/*",
                }
            }
            PaymentRowsEditor { rows }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: submitting(),
                if submitting() {
                    i { class: "fa-solid fa-spinner fa-spin" }
                    " Adding..."
                } else {
                    " Add Trip"
                }
            }
        }
    }
}

fn submit_add_trip(
    data: AdminData,
    mut toast: ToastManager,
    mut destination: Signal<String>,
    mut date: Signal<String>,
    mut original_price: Signal<String>,
    mut sale_price: Signal<String>,
    mut max_participants: Signal<String>,
    mut rows: Signal<Vec<PaymentDetail>>,
    mut submitting: Signal<bool>,
) {
    if *submitting.peek() {
        return;
    }

    let dest = destination.peek().trim().to_string();
    let trip_date = date.peek().trim().to_string();
    let image = browser::file_from_input("trip-image");
    if dest.is_empty() || trip_date.is_empty() || image.is_none() {
        toast.show("Please fill in all required fields.", ToastSeverity::Error);
        return;
    }
    let (Ok(original), Ok(sale), Ok(max)) = (
        original_price.peek().trim().parse::<f64>(),
        sale_price.peek().trim().parse::<f64>(),
        max_participants.peek().trim().parse::<u32>(),
    ) else {
        toast.show(
            "Prices and participant count must be valid numbers.",
            ToastSeverity::Error,
        );
        return;
    };

    let Ok(form) = web_sys::FormData::new() else {
        toast.show("Could not build the upload form.", ToastSeverity::Error);
        return;
    };
    let _ = form.append_with_str("destination", &dest);
    let _ = form.append_with_str("date", &trip_date);
    let _ = form.append_with_str("originalPrice", &original.to_string());
    let _ = form.append_with_str("salePrice", &sale.to_string());
    let _ = form.append_with_str("maxParticipants", &max.to_string());
    let _ = form.append_with_str("paymentDetails", &encode_payment_details(&rows.peek()));
    let _ = form.append_with_str("password", &data.credential());
    if let Some(file) = image {
        let _ = form.append_with_blob("image", &file);
    }

    submitting.set(true);
    spawn(async move {
        match api::create_trip(form).await {
            Ok(()) => {
                toast.show("Trip added", ToastSeverity::Success);
                destination.set(String::new());
                date.set(String::new());
                original_price.set(String::new());
                sale_price.set(String::new());
                max_participants.set(String::new());
                rows.set(Vec::new());
                browser::clear_file_input("trip-image");
                data.load(Collection::Trips);
            }
            Err(err) => toast.show(err.notice(), ToastSeverity::Error),
        }
        // Restored on success and failure alike.
        submitting.set(false);
    });
}
