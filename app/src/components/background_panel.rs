//! Landing-page background media setting.

use dioxus::prelude::*;
use tracing::warn;

use crate::api;
use crate::browser;
use crate::components::toast::{ToastSeverity, use_toast};
use crate::data::use_admin_data;

const FILE_INPUT_ID: &str = "background-media";

#[component]
pub fn BackgroundPanel() -> Element {
    let data = use_admin_data();
    let mut toast = use_toast();
    let mut current = use_signal(|| None::<String>);
    let mut uploading = use_signal(|| false);

    use_future(move || async move {
        match api::fetch_background().await {
            Ok(background) => current.set(background),
            Err(err) => warn!("loading background setting failed: {err}"),
        }
    });

    let preview = current
        .read()
        .as_deref()
        .map(api::media_url)
        .filter(|url| !url.is_empty());

    rsx! {
        section { class: "panel", id: "background-panel",
            div { class: "panel-header",
                h2 { "Landing Background" }
            }
            if let Some(url) = preview {
                img { class: "background-preview", src: "{url}", alt: "Current background" }
            } else {
                p { class: "row-info", "No background set." }
            }
            form {
                class: "panel-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    if *uploading.peek() {
                        return;
                    }
                    let Some(file) = browser::file_from_input(FILE_INPUT_ID) else {
                        toast.show("Choose an image or video first.", ToastSeverity::Error);
                        return;
                    };
                    let Ok(form) = web_sys::FormData::new() else {
                        toast.show("Could not build the upload form.", ToastSeverity::Error);
                        return;
                    };
                    let _ = form.append_with_str("password", &data.credential());
                    let _ = form.append_with_blob("background", &file);

                    uploading.set(true);
                    spawn(async move {
                        match api::update_background(form).await {
                            Ok(()) => {
                                toast.show("Background updated", ToastSeverity::Success);
                                browser::clear_file_input(FILE_INPUT_ID);
                                match api::fetch_background().await {
                                    Ok(background) => current.set(background),
                                    Err(err) => warn!("reloading background setting failed: {err}"),
                                }
                            }
                            Err(err) => toast.show(err.notice(), ToastSeverity::Error),
                        }
                        uploading.set(false);
                    });
                },

                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*,video/*",
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: uploading(),
                    if uploading() {
                        i { class: "fa-solid fa-spinner fa-spin" }
                        " Uploading..."
                    } else {
                        " Upload"
                    }
                }
            }
        }
    }
}
