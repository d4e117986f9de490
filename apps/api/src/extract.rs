//! Upload text extraction — bytes in, best-effort UTF-8 text out.

use std::path::Path;

use tracing::error;

use crate::errors::AppError;

/// Extracts plain text from an uploaded file based on its extension.
/// PDF and plain-text files are supported; anything else is rejected.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf_text(bytes),
        "txt" => Ok(String::from_utf8_lossy(bytes).trim().to_string()),
        "" => Err(AppError::Validation(
            "Uploaded file has no extension".to_string(),
        )),
        other => Err(AppError::Validation(format!(
            "Unsupported file type: .{other}"
        ))),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            error!("Error extracting text from PDF: {e}");
            Err(AppError::UnprocessableEntity(
                "Failed to extract text from PDF".to_string(),
            ))
        }
    }
}
