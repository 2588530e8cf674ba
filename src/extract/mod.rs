//! Batched PDF text extraction.
//!
//! The pipeline pulls per-page text out of a loaded document in fixed-size
//! concurrent batches. Page results are written at their absolute page
//! index, so the final concatenation preserves document order whatever the
//! completion order inside a batch. Batches run sequentially, which bounds
//! the number of in-flight page parses to the batch size.

pub mod engine;
#[cfg(target_arch = "wasm32")]
pub mod pdfjs;

use futures::future::try_join_all;
use tracing::debug;

use crate::error::{Error, Result};
use crate::progress::{ProgressSink, ProgressTracker};
use engine::PdfEngine;

/// Extract the full text of a loaded document.
///
/// Fragments of one page are joined with single spaces, pages likewise, and
/// the result is trimmed. Progress advances by one page at a time, as each
/// page completes. Fails on a zero-page document; any per-page failure
/// aborts the whole extraction and no partial text is returned.
pub async fn extract_document_text<E, S>(engine: &E, sink: &S, batch_size: usize) -> Result<String>
where
    E: PdfEngine,
    S: ProgressSink,
{
    let total = engine.page_count();
    if total == 0 {
        return Err(Error::EmptyDocument);
    }
    let batch_size = batch_size.max(1);
    let tracker = ProgressTracker::new(total);
    let mut pages: Vec<String> = vec![String::new(); total];

    let indices: Vec<usize> = (0..total).collect();
    for chunk in indices.chunks(batch_size) {
        let tracker = &tracker;
        let batch = try_join_all(chunk.iter().map(|&index| async move {
            let fragments = engine.page_fragments(index + 1).await?;
            sink.update(tracker.advance());
            Ok::<_, Error>((index, fragments.join(" ")))
        }))
        .await?;

        for (index, text) in batch {
            pages[index] = text;
        }
        debug!(
            target: "extract",
            completed = tracker.completed(),
            total = total,
            "batch finished"
        );
    }

    Ok(pages.join(" ").trim().to_string())
}
