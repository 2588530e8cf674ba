//! Browser glue. Everything that touches web-sys lives under this module,
//! which only exists on wasm targets.

pub mod fill;
pub mod file;
pub mod notifier;
pub mod wait;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::error::{Error, Result};

/// Human-readable form of an arbitrary JS error value.
pub fn js_value_string(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::dom("no window in this context"))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::dom("document not available"))
}

/// Blocking user-facing alert; a failure to even alert is swallowed.
pub(crate) fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
