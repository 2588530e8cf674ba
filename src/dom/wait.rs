//! Bounded waits for DOM elements.
//!
//! The wait is a cancellable future: it resolves on the first selector
//! match and rejects on deadline, with the change-notification mechanism
//! (a structural MutationObserver) hidden behind it.

use futures::channel::oneshot;
use futures::future::{self, Either};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, MutationObserver, MutationObserverInit};

use super::{document, js_value_string};
use crate::error::{Error, Result};

/// Resolve with the first element matching `selector`, or fail with
/// [`Error::WaitTimeout`] after `timeout_ms`.
///
/// An element already present returns without observing. Otherwise a
/// structural observer (child list + subtree) is attached to the document
/// root and disconnected again on both the success and the timeout path.
pub async fn wait_for_element(selector: &str, timeout_ms: u32) -> Result<Element> {
    let document = document()?;
    if let Some(found) = document
        .query_selector(selector)
        .map_err(|e| Error::dom(js_value_string(&e)))?
    {
        return Ok(found);
    }

    let (tx, rx) = oneshot::channel::<Element>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let callback = {
        let tx = Rc::clone(&tx);
        let document = document.clone();
        let selector = selector.to_string();
        Closure::<dyn FnMut()>::new(move || {
            if let Ok(Some(found)) = document.query_selector(&selector) {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(found);
                }
            }
        })
    };

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| Error::dom(js_value_string(&e)))?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&document, &options)
        .map_err(|e| Error::dom(js_value_string(&e)))?;

    let deadline = sleep(timeout_ms);
    futures::pin_mut!(deadline);

    let result = match future::select(rx, deadline).await {
        Either::Left((Ok(found), _)) => Ok(found),
        Either::Left((Err(_), _)) => Err(Error::dom("element wait dropped")),
        Either::Right(((), _)) => Err(Error::wait_timeout(selector, timeout_ms)),
    };

    observer.disconnect();
    result
}

/// setTimeout-backed sleep. Resolves immediately when scheduling is not
/// possible, so a deadline built on it still fires.
pub(crate) async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}
