//! Error types for the selection-to-chat pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors, one variant per failure class.
///
/// Every failure is terminal for its unit of work (one file, or one element
/// wait); there are no retries anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// An element never appeared within its deadline
    #[error("timed out after {timeout_ms}ms waiting for '{selector}'")]
    WaitTimeout { selector: String, timeout_ms: u32 },

    /// The platform failed to hand over the selected file's bytes
    #[error("failed to read '{filename}': {message}")]
    FileRead { filename: String, message: String },

    /// The document parsed but contains no pages
    #[error("PDF has no pages")]
    EmptyDocument,

    /// The PDF library rejected the document
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// A browser API call failed outside the cases above
    #[error("browser error: {0}")]
    Dom(String),
}

impl Error {
    /// Create a wait-timeout error
    pub fn wait_timeout(selector: impl Into<String>, timeout_ms: u32) -> Self {
        Self::WaitTimeout {
            selector: selector.into(),
            timeout_ms,
        }
    }

    /// Create a file-read error
    pub fn file_read(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileRead {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a DOM error
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
