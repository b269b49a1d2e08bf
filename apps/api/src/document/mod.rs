//! Document-to-text: the single point where uploaded files are turned into text.
//!
//! Extraction is CPU-bound; callers run `DocumentReader::read` inside
//! `tokio::task::spawn_blocking`.
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction failed: {0}")]
    Extraction(String),
}

/// Full extracted text plus a best-effort paragraph segmentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentText {
    pub full_text: String,
    pub chunks: Vec<String>,
}

impl DocumentText {
    pub fn from_text(full_text: String) -> Self {
        let chunks = split_paragraphs(&full_text);
        Self { full_text, chunks }
    }
}

pub trait DocumentReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<DocumentText, DocumentReadError>;
}

/// PDF reader backed by `pdf-extract`.
pub struct PdfDocumentReader;

impl DocumentReader for PdfDocumentReader {
    fn read(&self, path: &Path) -> Result<DocumentText, DocumentReadError> {
        let bytes = std::fs::read(path)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| DocumentReadError::Extraction(e.to_string()))?;
        Ok(DocumentText::from_text(text))
    }
}

/// Splits on blank lines, trimming each chunk and dropping empty ones.
fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_paragraphs() {
        let chunks = split_paragraphs("Jane Doe\nEngineer\n\n\n\n  Experience  \n\n \n\nEducation");
        assert_eq!(chunks, vec!["Jane Doe\nEngineer", "Experience", "Education"]);
    }

    #[test]
    fn test_from_text_keeps_full_text() {
        let doc = DocumentText::from_text("a\n\nb".to_string());
        assert_eq!(doc.full_text, "a\n\nb");
        assert_eq!(doc.chunks.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PdfDocumentReader
            .read(Path::new("/definitely/not/here.pdf"))
            .unwrap_err();
        assert!(matches!(err, DocumentReadError::Io(_)));
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();
        let err = PdfDocumentReader.read(file.path()).unwrap_err();
        assert!(matches!(err, DocumentReadError::Extraction(_)));
    }
}
