//! Text Extractor — converts PDF bytes into one concatenated plain-text string.

use bytes::Bytes;

use crate::errors::AppError;

/// Extracts the text content of every page, in page order, into a single
/// string. Downstream code must not assume page boundaries are recoverable
/// from the output.
///
/// `pdf-extract` is synchronous and CPU-bound, so the work runs on the
/// blocking pool. The document handle lives entirely inside the closure and
/// is released on every exit path, success or failure.
pub async fn extract_text(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))
}
