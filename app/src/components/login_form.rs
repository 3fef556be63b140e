//! End-user login page.

use dioxus::prelude::*;
use tracing::{info, warn};

use uniscape_types::models::LoginPayload;

use crate::api;
use crate::browser;
use crate::components::theme::ThemeToggle;
use crate::components::toast::{ToastFrame, ToastSeverity, use_toast_provider};

#[component]
pub fn LoginPage() -> Element {
    let mut toast = use_toast_provider();
    let mut logged_in = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Silent probe: an existing session cookie shows the dashboard banner
    // instead of forcing a re-login.
    use_future(move || async move {
        match api::check_profile().await {
            Ok(active) => {
                if active {
                    info!("existing session detected");
                }
                logged_in.set(active);
            }
            Err(err) => warn!("session probe failed: {err}"),
        }
    });

    rsx! {
        div { class: "auth-page",
            header { class: "auth-header",
                h1 { "UniScape" }
                ThemeToggle {}
            }

            if logged_in() {
                div { class: "session-banner",
                    p { "You are already logged in." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| browser::redirect_to("/dashboard"),
                        "Go to dashboard"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            spawn(async move {
                                match api::logout().await {
                                    Ok(()) => {
                                        toast.show("Logged out", ToastSeverity::Success);
                                        logged_in.set(false);
                                    }
                                    Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                                }
                            });
                        },
                        "Log out"
                    }
                }
            }

            form {
                class: "auth-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    if *submitting.peek() {
                        return;
                    }
                    let payload = LoginPayload {
                        username: username.peek().trim().to_string(),
                        password: password.peek().clone(),
                    };
                    if payload.username.is_empty() || payload.password.is_empty() {
                        toast.show("Username and password are required.", ToastSeverity::Error);
                        return;
                    }
                    submitting.set(true);
                    spawn(async move {
                        match api::login(&payload).await {
                            // The redirect unloads the page; no state to restore.
                            Ok(()) => browser::redirect_to("/dashboard"),
                            Err(err) => {
                                toast.show(err.notice(), ToastSeverity::Error);
                                submitting.set(false);
                            }
                        }
                    });
                },

                h2 { "Log In" }
                input {
                    placeholder: "Username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting(),
                    if submitting() {
                        i { class: "fa-solid fa-spinner fa-spin" }
                        " Logging in..."
                    } else {
                        " Log In"
                    }
                }
                p { class: "auth-switch",
                    "New here? "
                    a { href: "/signup", "Create an account" }
                }
            }

            ToastFrame {}
        }
    }
}
