//! Edit-route modal, seeded from a fresh reload of the routes collection.

use dioxus::prelude::*;

use uniscape_types::models::RoutePayload;
use uniscape_types::Collection;

use crate::api;
use crate::components::toast::{ToastManager, ToastSeverity, use_toast};
use crate::data::{AdminData, use_admin_data};

#[derive(Clone, PartialEq)]
pub struct RouteDraft {
    pub id: String,
    pub route_name: String,
    pub kind: String,
    pub departure_time: String,
    pub price: String,
    pub capacity: String,
}

#[derive(Clone, Copy)]
pub struct RouteEditor {
    draft: Signal<Option<RouteDraft>>,
    saving: Signal<bool>,
}

impl RouteEditor {
    pub fn new() -> Self {
        Self {
            draft: Signal::new(None),
            saving: Signal::new(false),
        }
    }

    pub fn open(&mut self, route_id: String, data: AdminData, mut toast: ToastManager) {
        let mut draft = self.draft;
        spawn(async move {
            let routes = match api::fetch_routes(&data.credential()).await {
                Ok(routes) => routes,
                Err(err) => {
                    toast.show(err.notice(), ToastSeverity::Error);
                    return;
                }
            };
            let Some(route) = routes.into_iter().find(|r| r.id == route_id) else {
                toast.show("That route no longer exists.", ToastSeverity::Error);
                return;
            };
            draft.set(Some(RouteDraft {
                id: route.id,
                route_name: route.route_name,
                kind: route.kind,
                departure_time: route.departure_time,
                price: route.price.to_string(),
                capacity: route.capacity.to_string(),
            }));
        });
    }

    pub fn close(&mut self) {
        self.draft.set(None);
    }
}

impl Default for RouteEditor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_route_editor_provider() -> RouteEditor {
    use_context_provider(RouteEditor::new)
}

pub fn use_route_editor() -> RouteEditor {
    use_context::<RouteEditor>()
}

#[component]
pub fn RouteEditorModal() -> Element {
    let mut editor = use_route_editor();
    let data = use_admin_data();
    let mut toast = use_toast();

    let draft_guard = editor.draft.read();
    let Some(draft) = draft_guard.as_ref() else {
        return rsx! {};
    };
    let draft = draft.clone();
    drop(draft_guard);

    let saving = *editor.saving.read();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| editor.close(),
            div {
                class: "modal edit-route-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Edit Route" }
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
                        let (Ok(price_value), Ok(capacity_value)) = (
                            current.price.trim().parse::<f64>(),
                            current.capacity.trim().parse::<u32>(),
                        ) else {
                            toast.show(
                                "Price and capacity must be valid numbers.",
                                ToastSeverity::Error,
                            );
                            return;
                        };
                        let payload = RoutePayload {
                            route_name: current.route_name.trim().to_string(),
                            kind: current.kind.clone(),
                            departure_time: current.departure_time.clone(),
                            price: price_value,
                            capacity: capacity_value,
                            password: data.credential(),
                        };
                        editor.saving.set(true);
                        spawn(async move {
                            match api::update_route(&current.id, &payload).await {
                                Ok(()) => {
                                    toast.show("Route updated", ToastSeverity::Success);
                                    editor.close();
                                    data.load(Collection::Transport);
                                }
                                Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                            }
                            editor.saving.set(false);
                        });
                    },

                    div { class: "form-grid",
                        label { "Route name"
                            input {
                                value: "{draft.route_name}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.route_name = e.value();
                                    }
                                },
                            }
                        }
                        label { "Type"
                            select {
                                value: "{draft.kind}",
                                onchange: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.kind = e.value();
                                    }
                                },
                                option { value: "bus", "Bus" }
                                option { value: "train", "Train" }
                                option { value: "flight", "Flight" }
                            }
                        }
                        label { "Departure time"
                            input {
                                r#type: "time",
                                value: "{draft.departure_time}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.departure_time = e.value();
                                    }
                                },
                            }
                        }
                        label { "Price"
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{draft.price}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.price = e.value();
                                    }
                                },
                            }
                        }
                        label { "Capacity"
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{draft.capacity}",
                                oninput: move |e| {
                                    if let Some(draft) = editor.draft.write().as_mut() {
                                        draft.capacity = e.value();
                                    }
                                },
                            }
                        }
                    }

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
