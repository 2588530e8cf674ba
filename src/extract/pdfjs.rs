//! pdf.js backend, used when the host page already ships pdf.js.
//!
//! The bridge talks to the page's `pdfjsLib` global through a small JS
//! module; the wasm side only moves bytes in and fragment strings out.

use wasm_bindgen::prelude::*;

use super::engine::PdfEngine;
use crate::error::{Error, Result};

#[wasm_bindgen(module = "/js/pdfjs_bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = pdfjsAvailable)]
    fn pdfjs_available() -> bool;

    #[wasm_bindgen(catch, js_name = openDocument)]
    async fn open_document(
        bytes: &[u8],
        worker_src: Option<String>,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = pageCount)]
    fn page_count(doc: &JsValue) -> u32;

    #[wasm_bindgen(catch, js_name = pageTextFragments)]
    async fn page_text_fragments(
        doc: &JsValue,
        page_no: u32,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// Whether the host page exposes a usable `pdfjsLib` global.
pub fn available() -> bool {
    pdfjs_available()
}

/// A document opened through the host page's pdf.js build.
pub struct PdfJsEngine {
    doc: JsValue,
    pages: usize,
}

impl PdfJsEngine {
    /// Open a document through pdf.js. When set, `worker_src` overrides the
    /// worker script location before the load.
    pub async fn load(bytes: &[u8], worker_src: Option<&str>) -> Result<Self> {
        let doc = open_document(bytes, worker_src.map(str::to_string))
            .await
            .map_err(|e| Error::parse(crate::dom::js_value_string(&e)))?;
        let pages = page_count(&doc) as usize;
        Ok(Self { doc, pages })
    }
}

impl PdfEngine for PdfJsEngine {
    fn page_count(&self) -> usize {
        self.pages
    }

    async fn page_fragments(&self, page_no: usize) -> Result<Vec<String>> {
        let items = page_text_fragments(&self.doc, page_no as u32)
            .await
            .map_err(|e| Error::parse(crate::dom::js_value_string(&e)))?;
        Ok(js_sys::Array::from(&items)
            .iter()
            .filter_map(|value| value.as_string())
            .collect())
    }
}
