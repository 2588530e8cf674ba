//! Orchestration: event wiring, multi-file fan-out, cleanup.

/// Join per-file extraction results into the text delivered to the chat
/// input. Failed files contributed empty strings; survivors are separated
/// by one blank line, in selection order.
pub fn combine_file_texts(texts: &[String]) -> String {
    texts
        .iter()
        .filter(|text| !text.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(target_arch = "wasm32")]
pub use wiring::activate;

#[cfg(target_arch = "wasm32")]
mod wiring {
    use std::rc::Rc;

    use anyhow::{anyhow, Context, Result};
    use futures::future::join_all;
    use tracing::{debug, error, info, warn};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Event, File, HtmlInputElement};

    use super::combine_file_texts;
    use crate::config::PasteConfig;
    use crate::dom::fill::fill_chat_input;
    use crate::dom::file::read_file_bytes;
    use crate::dom::notifier::ProgressPanel;
    use crate::dom::wait::wait_for_element;
    use crate::dom::{alert, js_value_string};
    use crate::error;
    use crate::extract::engine::LopdfEngine;
    use crate::extract::{extract_document_text, pdfjs};
    use crate::progress::ProgressSink;
    use crate::utils::pdf::{is_pdf_bytes, is_pdf_selection};

    /// Wait for the file input and attach the change listener.
    ///
    /// The wait is bounded; an input that never appears is an error the
    /// caller logs, leaving the feature dormant for this page load.
    pub async fn activate(config: PasteConfig) -> Result<()> {
        let config = Rc::new(config);
        let element = wait_for_element(&config.file_input_selector, config.input_wait_ms)
            .await
            .context("file input never appeared; PDF paste stays inactive")?;
        let input: HtmlInputElement = element.dyn_into().map_err(|element: web_sys::Element| {
            anyhow!(
                "'{}' matched a {} element, not a file input",
                config.file_input_selector,
                element.tag_name().to_lowercase()
            )
        })?;

        let listener = {
            let config = Rc::clone(&config);
            let input = input.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let files = selected_pdfs(&input);
                if files.is_empty() {
                    return;
                }
                info!(target: "app", count = files.len(), "PDF selection received");
                let config = Rc::clone(&config);
                let input = input.clone();
                spawn_local(async move {
                    process_selection(config, input, files).await;
                });
            })
        };
        input
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("failed to attach change listener: {}", js_value_string(&e)))?;
        // Page-lifetime listener; intentionally never dropped.
        listener.forget();

        info!(
            target: "app",
            selector = %config.file_input_selector,
            "PDF paste active"
        );
        Ok(())
    }

    /// The PDFs of the current selection, filtered by declared MIME type or
    /// filename extension. Non-PDF entries are ignored.
    fn selected_pdfs(input: &HtmlInputElement) -> Vec<File> {
        let Some(list) = input.files() else {
            return Vec::new();
        };
        let mut files = Vec::new();
        for index in 0..list.length() {
            if let Some(file) = list.item(index) {
                if is_pdf_selection(&file.type_(), &file.name()) {
                    files.push(file);
                } else {
                    debug!(target: "app", name = %file.name(), "ignoring non-PDF selection");
                }
            }
        }
        files
    }

    async fn process_selection(config: Rc<PasteConfig>, input: HtmlInputElement, files: Vec<File>) {
        let outcome = if files.len() == 1 {
            process_single(&config, &files[0]).await
        } else {
            process_many(&config, &files).await
        };

        // Clear the selection so the same file can be picked again later.
        input.set_value("");

        if let Err(err) = outcome {
            error!(target: "app", error = %err, "PDF processing failed");
            alert(&format!("PDF text extraction failed: {err}"));
        }
    }

    async fn process_single(config: &PasteConfig, file: &File) -> error::Result<()> {
        let text = extract_file(config, file, 0).await?;
        fill_chat_input(&config.chat_input_selector, &text, config.fill_wait_ms).await;
        Ok(())
    }

    /// Extract every file concurrently, each with its own panel slot. One
    /// file's failure is logged and contributes an empty string; it never
    /// aborts the sibling files.
    async fn process_many(config: &PasteConfig, files: &[File]) -> error::Result<()> {
        let texts = join_all(files.iter().enumerate().map(|(slot, file)| async move {
            match extract_file(config, file, slot).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(
                        target: "app",
                        file = %file.name(),
                        error = %err,
                        "file skipped"
                    );
                    String::new()
                }
            }
        }))
        .await;

        let combined = combine_file_texts(&texts);
        if combined.is_empty() {
            return Err(error::Error::parse(
                "no text could be extracted from the selected PDFs",
            ));
        }
        fill_chat_input(&config.chat_input_selector, &combined, config.fill_wait_ms).await;
        Ok(())
    }

    /// Run one file through read → extract, reporting progress on the
    /// panel for `slot`. The panel is torn down when this returns, on the
    /// error path included.
    async fn extract_file(config: &PasteConfig, file: &File, slot: usize) -> error::Result<String> {
        let panel = ProgressPanel::new(config.notifier.clone(), slot);
        panel.show(&format!("Reading {}…", file.name()))?;

        let bytes = read_file_bytes(file).await?;
        if !is_pdf_bytes(&bytes) {
            return Err(error::Error::parse("file does not look like a PDF"));
        }

        panel.update_message(&format!("Extracting {}…", file.name()));

        if pdfjs::available() {
            let engine = pdfjs::PdfJsEngine::load(&bytes, config.worker_src.as_deref()).await?;
            extract_document_text(&engine, &panel, config.page_batch_size).await
        } else {
            let engine = LopdfEngine::load(&bytes)?;
            extract_document_text(&engine, &panel, config.page_batch_size).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::combine_file_texts;

    #[test]
    fn joins_two_files_with_a_blank_line() {
        let texts = vec!["file1Text".to_string(), "file2Text".to_string()];
        assert_eq!(combine_file_texts(&texts), "file1Text\n\nfile2Text");
    }

    #[test]
    fn failed_files_drop_out_without_extra_separators() {
        let texts = vec![
            "first".to_string(),
            String::new(),
            "third".to_string(),
            String::new(),
        ];
        assert_eq!(combine_file_texts(&texts), "first\n\nthird");
    }

    #[test]
    fn all_failures_combine_to_empty() {
        let texts = vec![String::new(), String::new()];
        assert_eq!(combine_file_texts(&texts), "");
        assert_eq!(combine_file_texts(&[]), "");
    }
}
