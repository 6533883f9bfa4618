//! Document text extraction boundary.
//!
//! The pipeline only ever sees plain text; this module is the one place
//! that touches binary documents. PDF parsing is CPU-bound and must run
//! inside `tokio::task::spawn_blocking`, never on an executor thread.

use bytes::Bytes;

use crate::errors::AppError;

/// Extracts plain text from an in-memory PDF on a blocking thread.
///
/// A document that parses but yields no text is rejected the same way as an
/// unreadable one — the caller gets a request-level rejection, never a
/// pipeline failure.
pub async fn extract_text(document: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text_sync(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
}

fn extract_text_sync(document: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(document)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not parse PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text extracted from PDF".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = extract_text_sync(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn test_blocking_wrapper_propagates_rejection() {
        let result = extract_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
