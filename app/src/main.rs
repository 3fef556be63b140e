//! UniScape browser client.
//!
//! One WASM bundle serves three pages, picked by pathname: the admin
//! dashboard, the signup page, and the login page (default).

use dioxus::prelude::*;
use tracing::Level;

mod api;
mod browser;
mod components;
mod data;
mod session;

use components::{AdminPage, LoginPage, SignupPage};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| browser::restore_theme());

    let path = browser::current_path();
    if path.starts_with("/admin") {
        rsx! { AdminPage {} }
    } else if path.starts_with("/signup") {
        rsx! { SignupPage {} }
    } else {
        rsx! { LoginPage {} }
    }
}
