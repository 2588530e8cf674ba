//! Delivery of extracted text into the chat input.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::{alert, js_value_string, wait::wait_for_element};
use crate::error::{Error, Result};

/// Wait for the chat input, set its value and notify the host page.
///
/// Returns whether delivery succeeded. A missing or unusable input is
/// reported to the user and logged, but is not a hard error for the overall
/// flow: the extraction itself already succeeded.
pub async fn fill_chat_input(selector: &str, text: &str, timeout_ms: u32) -> bool {
    match try_fill(selector, text, timeout_ms).await {
        Ok(()) => true,
        Err(err) => {
            warn!(target: "fill", error = %err, "could not deliver extracted text");
            alert("PDF text was extracted, but the chat input could not be found, so nothing was inserted.");
            false
        }
    }
}

async fn try_fill(selector: &str, text: &str, timeout_ms: u32) -> Result<()> {
    let element = wait_for_element(selector, timeout_ms).await?;
    set_value(&element, text)?;
    notify_host(&element)?;
    focus_and_place_caret(&element, text);
    Ok(())
}

fn set_value(element: &Element, text: &str) -> Result<()> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(text);
        return Ok(());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(text);
        return Ok(());
    }
    Err(Error::dom(format!(
        "'{}' is not a text input",
        element.tag_name().to_lowercase()
    )))
}

/// Dispatch bubbling `input` and `change` events so the host page's
/// reactive bindings observe the programmatic write as if it were typed.
fn notify_host(element: &Element) -> Result<()> {
    for kind in ["input", "change"] {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict(kind, &init)
            .map_err(|e| Error::dom(js_value_string(&e)))?;
        element
            .dispatch_event(&event)
            .map_err(|e| Error::dom(js_value_string(&e)))?;
    }
    Ok(())
}

/// Focus the input and park the caret after the inserted text. Selection
/// APIs reject some input types; that is not worth failing delivery over.
fn focus_and_place_caret(element: &Element, text: &str) {
    // Caret offsets are UTF-16 code units, the unit of JS string length.
    let end = text.encode_utf16().count() as u32;
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let _ = input.set_selection_range(end, end);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        let _ = area.set_selection_range(end, end);
    }
}
