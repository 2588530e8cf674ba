//! Extraction backends.
//!
//! A backend exposes a loaded document page by page; the pipeline in the
//! parent module owns batching, ordering and joining. The pure-Rust lopdf
//! backend below works on every target; the pdf.js bridge backend lives in
//! `super::pdfjs` and only exists on wasm.

use crate::error::{Error, Result};

/// A loaded PDF document the pipeline can pull per-page text from.
///
/// Implementations report page text as the fragments their parser yields,
/// in parser order, without reordering or deduplication.
#[allow(async_fn_in_trait)]
pub trait PdfEngine {
    /// Number of pages in the loaded document.
    fn page_count(&self) -> usize;

    /// Text fragments of one page (1-based), in the order the parser
    /// reports them.
    async fn page_fragments(&self, page_no: usize) -> Result<Vec<String>>;
}

/// Pure-Rust backend over lopdf's page-level extraction API.
#[derive(Debug)]
pub struct LopdfEngine {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl LopdfEngine {
    /// Parse a document held fully in memory. Fails on malformed input;
    /// zero-page validation is left to the pipeline.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let doc = lopdf::Document::load_mem(bytes)?;
        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();
        Ok(Self { doc, page_numbers })
    }
}

impl PdfEngine for LopdfEngine {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    async fn page_fragments(&self, page_no: usize) -> Result<Vec<String>> {
        let number = self
            .page_numbers
            .get(page_no.wrapping_sub(1))
            .copied()
            .ok_or_else(|| Error::parse(format!("page {page_no} out of range")))?;
        let text = self.doc.extract_text(&[number])?;
        Ok(fragments_from_page_text(&text))
    }
}

/// lopdf reports one text block per page with line breaks between text
/// runs; each non-empty line is one fragment, matching the granularity
/// pdf.js reports through its text items.
fn fragments_from_page_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
