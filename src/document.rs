use crate::errors::StatementExtractError;
use std::fs;
use std::path::Path;

/// Pull per-page plain text out of the statement PDF.
///
/// Text extraction itself is delegated to `pdf-extract`; the document is read
/// once, up front, and the handle does not outlive this call.
pub(crate) fn page_texts(path: &Path) -> Result<Vec<String>, StatementExtractError> {
    let bytes = fs::read(path)?;
    pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| StatementExtractError::DocumentExtractFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = page_texts(Path::new("does-not-exist.pdf"));
        assert!(matches!(
            result,
            Err(StatementExtractError::ReadContentFailed(_))
        ));
    }

    #[test]
    fn test_garbage_bytes_are_an_extract_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("tbank-statement-rs-not-a-pdf.bin");
        fs::write(&path, b"definitely not a pdf").unwrap();

        let result = page_texts(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(StatementExtractError::DocumentExtractFailed(_))
        ));
    }
}
