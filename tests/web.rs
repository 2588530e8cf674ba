//! Browser-side behavior tests.
//!
//! These need a real DOM; run with `wasm-pack test --headless --chrome`.
//! The portable pipeline logic is covered by the native unit tests.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use chat_pdf_paste::config::NotifierConfig;
use chat_pdf_paste::dom::fill::fill_chat_input;
use chat_pdf_paste::dom::notifier::ProgressPanel;
use chat_pdf_paste::dom::wait::wait_for_element;
use chat_pdf_paste::progress::ProgressSink;
use chat_pdf_paste::Error;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
async fn finds_an_element_that_is_already_present() {
    let document = document();
    let div = document.create_element("div").unwrap();
    div.set_id("already-present");
    document.body().unwrap().append_child(&div).unwrap();

    let found = wait_for_element("#already-present", 1_000).await.unwrap();
    assert_eq!(found.id(), "already-present");
    div.remove();
}

#[wasm_bindgen_test]
async fn wait_times_out_when_nothing_matches() {
    let err = wait_for_element("#never-appears", 50).await.unwrap_err();
    assert!(matches!(err, Error::WaitTimeout { .. }));
}

#[wasm_bindgen_test]
async fn wait_resolves_when_the_element_appears_later() {
    let document = document();
    let inserter = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let div = inserter.create_element("div").unwrap();
        div.set_id("late-arrival");
        inserter.body().unwrap().append_child(&div).unwrap();
    });

    let found = wait_for_element("#late-arrival", 2_000).await.unwrap();
    assert_eq!(found.id(), "late-arrival");
    found.remove();
}

#[wasm_bindgen_test]
async fn fill_sets_value_fires_events_and_parks_the_caret() {
    let document = document();
    let area: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .unwrap()
        .dyn_into()
        .unwrap();
    area.set_id("chat-box");
    let body = document.body().unwrap();
    body.append_child(&area).unwrap();

    // Count bubbled input/change events at the body, like a framework would.
    let seen = Rc::new(Cell::new(0u32));
    let listener = {
        let seen = Rc::clone(&seen);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            seen.set(seen.get() + 1);
        })
    };
    body.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
        .unwrap();
    body.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .unwrap();

    let delivered = fill_chat_input("#chat-box", "hello from the pdf", 1_000).await;

    assert!(delivered);
    assert_eq!(area.value(), "hello from the pdf");
    assert_eq!(seen.get(), 2);
    assert_eq!(area.selection_start().unwrap(), Some(18));

    body.remove_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
        .unwrap();
    body.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .unwrap();
    area.remove();
}

#[wasm_bindgen_test]
async fn fill_reports_failure_for_a_missing_input() {
    // Note: this path also raises a user-facing alert, which headless
    // drivers auto-dismiss.
    let delivered = fill_chat_input("#no-such-input", "text", 50).await;
    assert!(!delivered);
}

#[wasm_bindgen_test]
fn panel_shows_at_its_slot_offset_and_removes_idempotently() {
    let panel = ProgressPanel::new(NotifierConfig::default(), 1);
    panel.show("working").unwrap();

    let root: web_sys::HtmlElement = document()
        .body()
        .unwrap()
        .last_element_child()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(root.style().get_property_value("top").unwrap(), "100px");

    panel.update(41.6);
    panel.update_message("still working");
    panel.remove();
    panel.remove();
}
