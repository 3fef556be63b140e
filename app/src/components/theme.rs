//! Light/dark theme switch persisted in localStorage.

use dioxus::prelude::*;

use crate::browser;

#[component]
pub fn ThemeToggle() -> Element {
    let mut dark = use_signal(|| browser::saved_theme().as_deref() == Some("dark"));

    rsx! {
        label { class: "theme-toggle",
            input {
                r#type: "checkbox",
                checked: dark(),
                onchange: move |e| {
                    let enabled = e.checked();
                    dark.set(enabled);
                    browser::apply_theme(if enabled { "dark" } else { "light" });
                }
            }
            span { class: "theme-toggle-label",
                if dark() {
                    i { class: "fa-solid fa-moon" }
                } else {
                    i { class: "fa-solid fa-sun" }
                }
            }
        }
    }
}
