//! Admin session gate view.
//!
//! Prompts once for the admin credential and drives the gate's terminal
//! state machine: a rejected or missing password and a connectivity
//! failure all dead-end here; the operator reloads the page to retry.

use dioxus::prelude::*;
use tracing::error;

use crate::api;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::data::use_admin_data;
use crate::session::{GateState, use_session};

#[component]
pub fn SessionGate() -> Element {
    let mut session = use_session();
    let data = use_admin_data();
    let mut toast = use_toast();
    let candidate = use_signal(String::new);

    let state = session.state();

    match state {
        GateState::Denied => rsx! {
            div { class: "gate-terminal alert alert-danger", "Access denied." }
        },
        GateState::ConnectionError => rsx! {
            div { class: "gate-terminal alert alert-danger", "Server connection error." }
        },
        // AdminPage swaps the gate out before this renders.
        GateState::Ready => rsx! {},
        GateState::Prompt | GateState::Verifying => {
            let verifying = state == GateState::Verifying;
            let mut candidate = candidate;
            rsx! {
                form {
                    class: "gate-card",
                    onsubmit: move |e| {
                        e.prevent_default();
                        if verifying {
                            return;
                        }
                        let entered = candidate.peek().trim().to_string();
                        if entered.is_empty() {
                            // Missing credential is terminal, same as a rejection.
                            toast.show(
                                "Password is required to access this page.",
                                ToastSeverity::Error,
                            );
                            session.set_state(GateState::Denied);
                            return;
                        }
                        session.set_state(GateState::Verifying);
                        spawn(async move {
                            match api::verify_admin(&entered).await {
                                Ok(true) => {
                                    session.unlock(entered);
                                    data.load_all();
                                }
                                Ok(false) => {
                                    toast.show(
                                        "Incorrect password. Access has been denied.",
                                        ToastSeverity::Error,
                                    );
                                    session.set_state(GateState::Denied);
                                }
                                Err(err) => {
                                    error!("admin verification failed: {err}");
                                    toast.show(
                                        "Could not connect to the server. Please try again later.",
                                        ToastSeverity::Error,
                                    );
                                    session.set_state(GateState::ConnectionError);
                                }
                            }
                        });
                    },

                    h2 { "Admin Access" }
                    input {
                        r#type: "password",
                        placeholder: "Admin password",
                        disabled: verifying,
                        value: "{candidate}",
                        oninput: move |e| candidate.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: verifying,
                        if verifying {
                            i { class: "fa-solid fa-spinner fa-spin" }
                            " Verifying..."
                        } else {
                            " Unlock"
                        }
                    }
                }
            }
        }
    }
}
