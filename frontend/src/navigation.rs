//! Browser location, cookies and the current date.

use gloo_console::error;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full location change; the server answers every page path with the app.
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            error!("Navigation failed:", e);
        }
    }
}

/// Today as `YYYY-MM-DD` (UTC), the upper bound of the date search.
pub fn today_iso() -> String {
    let iso: String = Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

pub fn write_cookie(assignment: &str) {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok());

    if let Some(document) = document {
        if let Err(e) = document.set_cookie(assignment) {
            error!("Could not write cookie:", e);
        }
    }
}

pub fn encode_uri_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
