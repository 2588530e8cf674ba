//! Selected-file reading.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::js_value_string;
use crate::error::{Error, Result};

/// Read the selected file's full contents into memory. Single-shot, no
/// retry; a platform read failure carries the filename.
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| Error::file_read(file.name(), js_value_string(&e)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
