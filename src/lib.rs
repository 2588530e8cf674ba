//! chat-pdf-paste: turns PDF selections in a chat page into text pasted
//! straight into the chat input.
//!
//! The module watches the page's file-selection control; whenever PDFs are
//! picked it extracts their text page by page (pdf.js when the page ships
//! it, a pure-Rust parser otherwise), shows a floating progress panel per
//! file, and writes the result into the chat input with the events the host
//! application expects.
//!
//! The crate builds to WebAssembly for the browser. The extraction
//! pipeline, progress accounting, configuration and selection filtering are
//! portable and unit-tested on native targets; everything that touches the
//! DOM lives under [`dom`] and only exists on wasm.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod progress;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{NotifierConfig, PasteConfig};
pub use error::{Error, Result};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// One-time module setup: readable panics and tracing to the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Install the PDF paste feature on the current page.
///
/// `options` is a plain object (see [`PasteConfig`]); missing fields take
/// their defaults, `undefined`/`null` means all defaults. Returns
/// immediately: the bounded wait for the file input runs in the background,
/// and an input that never appears is logged and leaves the feature dormant
/// without touching the host page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn install(options: JsValue) -> std::result::Result<(), JsValue> {
    let config: PasteConfig = if options.is_undefined() || options.is_null() {
        PasteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = app::activate(config).await {
            tracing::error!(target: "app", error = ?err, "initialization failed");
        }
    });
    Ok(())
}
