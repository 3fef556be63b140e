//! Signup page with live password checklist and derived username preview.

use dioxus::prelude::*;

use uniscape_types::models::RegisterPayload;
use uniscape_types::validation::{SignupForm, password_policy};

use crate::api;
use crate::browser;
use crate::components::theme::ThemeToggle;
use crate::components::toast::{ToastFrame, ToastSeverity, use_toast_provider};

#[component]
pub fn SignupPage() -> Element {
    let mut toast = use_toast_provider();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut sap_id = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut referral = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // All enablement logic is in the form type; signals only mirror inputs.
    let form = SignupForm {
        name: name.read().clone(),
        email: email.read().clone(),
        sap_id: sap_id.read().clone(),
        gender: gender.read().clone(),
        password: password.read().clone(),
    };
    let policy = password_policy(&form.password);
    let username_preview = form.derived_username();
    let can_submit = form.submit_enabled() && !submitting();

    let check_class = |met: bool| if met { "check met" } else { "check" };

    rsx! {
        div { class: "auth-page",
            header { class: "auth-header",
                h1 { "UniScape" }
                ThemeToggle {}
            }

            form {
                class: "auth-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    if *submitting.peek() {
                        return;
                    }
                    let current = SignupForm {
                        name: name.peek().clone(),
                        email: email.peek().clone(),
                        sap_id: sap_id.peek().clone(),
                        gender: gender.peek().clone(),
                        password: password.peek().clone(),
                    };
                    if !current.submit_enabled() {
                        return;
                    }
                    let code = referral.peek().trim().to_string();
                    let payload = RegisterPayload {
                        name: current.name.trim().to_string(),
                        username: current.derived_username(),
                        email: current.email.trim().to_string(),
                        sap_id: current.sap_id.trim().to_string(),
                        gender: current.gender.clone(),
                        password: current.password.clone(),
                        referral_code: if code.is_empty() { None } else { Some(code) },
                    };
                    submitting.set(true);
                    spawn(async move {
                        match api::register(&payload).await {
                            Ok(()) => {
                                toast.show(
                                    "Account created. You can log in now.",
                                    ToastSeverity::Success,
                                );
                                browser::redirect_to("/");
                            }
                            Err(err) => {
                                toast.show(err.notice(), ToastSeverity::Error);
                                submitting.set(false);
                            }
                        }
                    });
                },

                h2 { "Create Account" }
                input {
                    placeholder: "Full name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    placeholder: "SAP ID",
                    value: "{sap_id}",
                    oninput: move |e| sap_id.set(e.value()),
                }
                select {
                    value: "{gender}",
                    onchange: move |e| gender.set(e.value()),
                    option { value: "", disabled: true, selected: gender.read().is_empty(), "Gender" }
                    option { value: "female", "Female" }
                    option { value: "male", "Male" }
                    option { value: "other", "Other" }
                }

                if !username_preview.is_empty() {
                    p { class: "username-preview", "Your username will be: {username_preview}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "new-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                ul { class: "password-checklist",
                    li { class: check_class(policy.min_length), "At least 8 characters" }
                    li { class: check_class(policy.has_letter), "Contains a letter" }
                    li { class: check_class(policy.has_digit), "Contains a number" }
                    li { class: check_class(policy.has_symbol), "Contains a symbol" }
                }

                input {
                    placeholder: "Referral code (optional)",
                    value: "{referral}",
                    oninput: move |e| referral.set(e.value()),
                    onfocusout: move |_| {
                        let code = referral.peek().trim().to_string();
                        if code.is_empty() {
                            return;
                        }
                        spawn(async move {
                            match api::validate_referral(&code).await {
                                Ok(()) => toast.show("Referral code applied.", ToastSeverity::Success),
                                Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                            }
                        });
                    },
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    if submitting() {
                        i { class: "fa-solid fa-spinner fa-spin" }
                        " Creating account..."
                    } else {
                        " Sign Up"
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    a { href: "/", "Log in" }
                }
            }

            ToastFrame {}
        }
    }
}
