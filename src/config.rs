//! Install-time configuration
//!
//! All options are static for the lifetime of the page: they are read once
//! by `install` and never changed afterwards.

use serde::Deserialize;

/// Options accepted by `install`. Every field is optional on the JS side;
/// missing fields take the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasteConfig {
    /// CSS selector for the file-selection control
    pub file_input_selector: String,
    /// CSS selector for the chat text input the extracted text lands in
    pub chat_input_selector: String,
    /// Progress panel appearance and placement
    pub notifier: NotifierConfig,
    /// Pages fetched and parsed concurrently within one extraction batch
    pub page_batch_size: usize,
    /// pdf.js worker script location, forwarded to the bridge when set
    pub worker_src: Option<String>,
    /// How long to wait for the file input before going dormant (ms)
    pub input_wait_ms: u32,
    /// How long the filler waits for the chat input (ms)
    pub fill_wait_ms: u32,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            file_input_selector: "input[type=\"file\"]".to_string(),
            chat_input_selector: "textarea".to_string(),
            notifier: NotifierConfig::default(),
            page_batch_size: 5,
            worker_src: None,
            input_wait_ms: 10_000,
            fill_wait_ms: 5_000,
        }
    }
}

/// Progress panel appearance and placement
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifierConfig {
    /// Accent color of the progress bar fill
    pub color: String,
    /// Top offset of the first panel (px)
    pub top_px: f64,
    /// Extra vertical offset per concurrently processed file (px)
    pub step_px: f64,
    /// Distance from the right viewport edge (px)
    pub right_px: f64,
}

impl NotifierConfig {
    /// Top offset for the panel of the file at `slot` (0-based among the
    /// files of one selection). Slots never overlap on screen.
    pub fn top_for_slot(&self, slot: usize) -> f64 {
        self.top_px + self.step_px * slot as f64
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            color: "#4caf50".to_string(),
            top_px: 20.0,
            step_px: 80.0,
            right_px: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PasteConfig;

    #[test]
    fn defaults_match_documented_values() {
        let config = PasteConfig::default();
        assert_eq!(config.page_batch_size, 5);
        assert_eq!(config.input_wait_ms, 10_000);
        assert_eq!(config.fill_wait_ms, 5_000);
        assert_eq!(config.notifier.top_px, 20.0);
        assert_eq!(config.notifier.step_px, 80.0);
        assert!(config.worker_src.is_none());
    }

    #[test]
    fn partial_options_keep_remaining_defaults() {
        let config: PasteConfig = serde_json::from_str(
            r##"{"chatInputSelector": "#prompt", "pageBatchSize": 2}"##,
        )
        .expect("valid options");
        assert_eq!(config.chat_input_selector, "#prompt");
        assert_eq!(config.page_batch_size, 2);
        assert_eq!(config.file_input_selector, "input[type=\"file\"]");
        assert_eq!(config.notifier.color, "#4caf50");
    }

    #[test]
    fn nested_notifier_options_deserialize() {
        let config: PasteConfig = serde_json::from_str(
            r##"{"notifier": {"color": "#1a73e8", "topPx": 40.0}, "workerSrc": "/pdf.worker.js"}"##,
        )
        .expect("valid options");
        assert_eq!(config.notifier.color, "#1a73e8");
        assert_eq!(config.notifier.top_px, 40.0);
        assert_eq!(config.notifier.step_px, 80.0);
        assert_eq!(config.worker_src.as_deref(), Some("/pdf.worker.js"));
    }

    #[test]
    fn slot_offsets_step_downwards() {
        let notifier = PasteConfig::default().notifier;
        assert_eq!(notifier.top_for_slot(0), 20.0);
        assert_eq!(notifier.top_for_slot(1), 100.0);
        assert_eq!(notifier.top_for_slot(2), 180.0);
    }
}
