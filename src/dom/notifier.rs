//! Floating progress panel.
//!
//! One panel per in-flight file. The panel is a scoped resource: `show`
//! acquires the on-screen elements, `remove` (or drop) detaches them, so
//! teardown happens on error paths too. Panels of concurrently processed
//! files never overlap: each file's slot maps to its own vertical offset.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

use super::{document, js_value_string};
use crate::config::NotifierConfig;
use crate::error::{Error, Result};
use crate::progress::ProgressSink;

/// On-screen handles of one shown panel.
struct PanelUi {
    root: HtmlElement,
    message: HtmlElement,
    bar: HtmlElement,
    label: HtmlElement,
}

/// Progress panel for the file at one selection slot.
///
/// States: hidden → shown → (updated)* → removed. `update` and
/// `update_message` are no-ops while hidden or removed; `remove` is
/// idempotent.
pub struct ProgressPanel {
    config: NotifierConfig,
    top_px: f64,
    ui: RefCell<Option<PanelUi>>,
}

impl ProgressPanel {
    /// Panel for the file at `slot` (0-based among the files of one
    /// selection event).
    pub fn new(config: NotifierConfig, slot: usize) -> Self {
        let top_px = config.top_for_slot(slot);
        Self {
            config,
            top_px,
            ui: RefCell::new(None),
        }
    }

    /// Create the on-screen block, replacing any previous instance.
    pub fn show(&self, message: &str) -> Result<()> {
        self.remove();
        let document = document()?;
        let ui = build_panel(&document, &self.config, self.top_px, message)?;
        document
            .body()
            .ok_or_else(|| Error::dom("document has no body"))?
            .append_child(&ui.root)
            .map_err(|e| Error::dom(js_value_string(&e)))?;
        *self.ui.borrow_mut() = Some(ui);
        Ok(())
    }

    /// Detach all panel elements. Idempotent.
    pub fn remove(&self) {
        if let Some(ui) = self.ui.borrow_mut().take() {
            ui.root.remove();
        }
    }
}

impl ProgressSink for ProgressPanel {
    fn update(&self, percent: f64) {
        if let Some(ui) = self.ui.borrow().as_ref() {
            let clamped = percent.clamp(0.0, 100.0);
            let _ = ui.bar.style().set_property("width", &format!("{clamped}%"));
            ui.label
                .set_text_content(Some(&format!("{}%", clamped.round() as u32)));
        }
    }

    fn update_message(&self, text: &str) {
        if let Some(ui) = self.ui.borrow().as_ref() {
            ui.message.set_text_content(Some(text));
        }
    }
}

impl Drop for ProgressPanel {
    fn drop(&mut self) {
        self.remove();
    }
}

fn build_panel(
    document: &Document,
    config: &NotifierConfig,
    top_px: f64,
    message: &str,
) -> Result<PanelUi> {
    let root = create_div(document)?;
    let style = root.style();
    set_style(&style, "position", "fixed")?;
    set_style(&style, "top", &format!("{top_px}px"))?;
    set_style(&style, "right", &format!("{}px", config.right_px))?;
    set_style(&style, "z-index", "2147483647")?;
    set_style(&style, "min-width", "220px")?;
    set_style(&style, "padding", "10px 14px")?;
    set_style(&style, "border-radius", "6px")?;
    set_style(&style, "background", "rgba(32, 33, 36, 0.92)")?;
    set_style(&style, "color", "#fff")?;
    set_style(&style, "font", "13px/1.4 system-ui, sans-serif")?;
    set_style(&style, "box-shadow", "0 2px 10px rgba(0, 0, 0, 0.35)")?;

    let message_line = create_div(document)?;
    message_line.set_text_content(Some(message));
    set_style(&message_line.style(), "margin-bottom", "6px")?;

    let track = create_div(document)?;
    let track_style = track.style();
    set_style(&track_style, "height", "6px")?;
    set_style(&track_style, "border-radius", "3px")?;
    set_style(&track_style, "background", "rgba(255, 255, 255, 0.25)")?;
    set_style(&track_style, "overflow", "hidden")?;

    let bar = create_div(document)?;
    let bar_style = bar.style();
    set_style(&bar_style, "height", "100%")?;
    set_style(&bar_style, "width", "0%")?;
    set_style(&bar_style, "background", &config.color)?;
    set_style(&bar_style, "transition", "width 0.2s ease")?;

    let label = create_div(document)?;
    label.set_text_content(Some("0%"));
    let label_style = label.style();
    set_style(&label_style, "margin-top", "4px")?;
    set_style(&label_style, "font-size", "11px")?;
    set_style(&label_style, "text-align", "right")?;

    append(&track, &bar)?;
    append(&root, &message_line)?;
    append(&root, &track)?;
    append(&root, &label)?;

    Ok(PanelUi {
        root,
        message: message_line,
        bar,
        label,
    })
}

fn create_div(document: &Document) -> Result<HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| Error::dom(js_value_string(&e)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::dom("created element is not an HtmlElement"))
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| Error::dom(js_value_string(&e)))
}

fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) -> Result<()> {
    style
        .set_property(property, value)
        .map_err(|e| Error::dom(js_value_string(&e)))
}
