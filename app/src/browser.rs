//! Small web-sys conveniences: theme persistence, navigation, form inputs.

use wasm_bindgen::JsCast;

const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn saved_theme() -> Option<String> {
    local_storage().and_then(|s| s.get_item(THEME_KEY).ok().flatten())
}

/// Apply a theme by setting `data-theme` on the document element and
/// persisting the choice.
pub fn apply_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}

pub fn restore_theme() {
    if let Some(theme) = saved_theme() {
        apply_theme(&theme);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// First selected file of an `<input type="file">`, looked up by element id.
pub fn file_from_input(input_id: &str) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into()
        .ok()?;
    input.files()?.get(0)
}

/// Clear an `<input type="file">` so a form reset actually drops the file.
pub fn clear_file_input(input_id: &str) {
    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}
