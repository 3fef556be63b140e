//! Edit-trip modal.
//!
//! Opening the editor reloads the trips collection and seeds the draft
//! from the fresh copy of the requested trip, so the form never shows a
//! row that was deleted or changed since the table last rendered.

use dioxus::prelude::*;

use uniscape_types::models::{PaymentDetail, TripUpdate};
use uniscape_types::payment::encode_payment_details;
use uniscape_types::Collection;

use crate::api;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::components::trips_panel::PaymentRowsEditor;
use crate::data::use_admin_data;

#[derive(Clone, PartialEq)]
pub struct TripDraft {
    pub id: String,
    pub destination: String,
    pub date: String,
    pub original_price: String,
    pub sale_price: String,
    pub max_participants: String,
}

#[derive(Clone, Copy)]
pub struct TripEditor {
    draft: Signal<Option<TripDraft>>,
    rows: Signal<Vec<PaymentDetail>>,
    saving: Signal<bool>,
}

impl TripEditor {
    pub fn new() -> Self {
        Self {
            draft: Signal::new(None),
            rows: Signal::new(Vec::new()),
            saving: Signal::new(false),
        }
    }

    /// Refetch the trips and seed the draft from the server's copy.
    pub fn open(
        &mut self,
        trip_id: String,
        mut toast: crate::components::toast::ToastManager,
    ) {
        let mut draft = self.draft;
        let mut rows = self.rows;
        spawn(async move {
            let trips = match api::fetch_trips().await {
                Ok(trips) => trips,
                Err(err) => {
                    toast.show(err.notice(), ToastSeverity::Error);
                    return;
                }
            };
            let Some(trip) = trips.into_iter().find(|t| t.id == trip_id) else {
                toast.show("That trip no longer exists.", ToastSeverity::Error);
                return;
            };
            // Date inputs take the yyyy-mm-dd prefix of the stored ISO stamp.
            let date = trip.date.get(..10).unwrap_or(&trip.date).to_string();
            rows.set(trip.payment_details.clone());
            draft.set(Some(TripDraft {
                id: trip.id,
                destination: trip.destination,
                date,
                original_price: trip.original_price.to_string(),
                sale_price: trip.sale_price.to_string(),
                max_participants: trip.max_participants.to_string(),
            }));
        });
    }

    pub fn close(&mut self) {
        self.draft.set(None);
        self.rows.set(Vec::new());
    }
}

impl Default for TripEditor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_trip_editor_provider() -> TripEditor {
    use_context_provider(TripEditor::new)
}

pub fn use_trip_editor() -> TripEditor {
    use_context::<TripEditor>()
}

#[component]
pub fn TripEditorModal() -> Element {
    let mut editor = use_trip_editor();
    let data = use_admin_data();
    let mut toast = use_toast();

    let draft_guard = editor.draft.read();
    let Some(draft) = draft_guard.as_ref() else {
        return rsx! {};
    };
    let draft = draft.clone();
    drop(draft_guard);

    let saving = *editor.saving.read();
    let rows = editor.rows;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| editor.close(),
            div {
                class: "modal edit-trip-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Edit Trip" }
                    button { class: "modal-close", onclick: move |_| editor.close(), "\u{00D7}" }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        if saving {
                            return;
                        }
                        let Some(current) = editor.draft.peek().clone() else {
                            return;
                        };
                        let (Ok(original), Ok(sale), Ok(max)) = (
                            current.original_price.trim().parse::<f64>(),
                            current.sale_price.trim().parse::<f64>(),
                            current.max_participants.trim().parse::<u32>(),
                        ) else {
                            toast.show(
                                "Prices and participant count must be valid numbers.",
                                ToastSeverity::Error,
                            );
                            return;
                        };
                        let update = TripUpdate {
                            destination: current.destination.trim().to_string(),
                            date: current.date.clone(),
                            original_price: original,
                            sale_price: sale,
                            max_participants: max,
                            payment_details: encode_payment_details(&editor.rows.peek()),
                            password: data.credential(),
                        };
                        editor.saving.set(true);
                        spawn(async move {
                            match api::update_trip(&current.id, &update).await {
                                Ok(()) => {
                                    toast.show("Trip updated", ToastSeverity::Success);
                                    editor.close();
                                    data.load(Collection::Trips);
                                }
                                Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                            }
                            editor.saving.set(false);
                        });
                    },

                    div { class: "form-grid",
                        label { "Destination"
                            input {
                                value: "{draft.destination}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.destination = e.value();
                                    }
                                },
                            }
                        }
                        label { "Date"
                            input {
                                r#type: "date",
                                value: "{draft.date}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.date = e.value();
                                    }
                                },
                            }
                        }
                        label { "Original price"
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{draft.original_price}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.original_price = e.value();
                                    }
                                },
                            }
                        }
                        label { "Sale price"
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{draft.sale_price}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.sale_price = e.value();
                                    }
                                },
                            }
                        }
                        label { "Max participants"
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{draft.max_participants}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.max_participants = e.value();
                                    }
                                },
                            }
                        }
                    }

                    PaymentRowsEditor { rows }

                    div { class: "modal-footer",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| editor.close(),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving,
                            if saving {
                                i { class: "fa-solid fa-spinner fa-spin" }
                                " Saving..."
                            } else {
                                " Save Changes"
                            }
                        }
                    }
                }
            }
        }
    }
}
