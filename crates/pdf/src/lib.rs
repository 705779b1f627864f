//! # studykit-pdf: PDF Document Extraction
//!
//! Implements the `DocumentExtractor` seam of the `studykit` library over
//! base64-encoded PDF bytes. Extraction is local and synchronous under the
//! hood; the async trait surface matches the other collaborators so the
//! router stays agnostic about where extraction runs.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use pdf::file::FileOptions;
use studykit::{providers::extract::DocumentExtractor, StudyError};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PdfExtractError {
    #[error("Failed to decode base64 PDF data: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Failed to parse PDF content: {0}")]
    PdfParse(String),
    #[error("No extractable text found in PDF")]
    NoText,
}

/// Extracts text from every page of a PDF.
///
/// Each page's text is prefixed with a `Page <n>:` label and pages are
/// separated by blank lines, so downstream prompts can reference locations.
pub fn extract_text(pdf_data: &[u8]) -> Result<String, PdfExtractError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| PdfExtractError::PdfParse(e.to_string()))?;
    let resolver = file.resolver();
    let mut full_text = String::new();

    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| PdfExtractError::PdfParse(e.to_string()))?;
        let mut page_text = String::new();
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| PdfExtractError::PdfParse(e.to_string()))?;
            for op in operations.iter() {
                if let pdf::content::Op::TextDraw { text } = op {
                    page_text.push_str(&text.to_string_lossy());
                }
            }
        }
        if !page_text.trim().is_empty() {
            full_text.push_str(&format!("Page {}:\n{}\n\n", page_num + 1, page_text));
        }
    }

    let trimmed = full_text.trim();
    if trimmed.is_empty() {
        return Err(PdfExtractError::NoText);
    }
    Ok(trimmed.to_string())
}

/// Decodes base64 PDF data and extracts its text.
pub fn extract_text_from_base64(encoded: &str) -> Result<String, PdfExtractError> {
    let pdf_data = general_purpose::STANDARD.decode(encoded)?;
    extract_text(&pdf_data)
}

/// The `DocumentExtractor` implementation backed by local PDF parsing.
#[derive(Clone, Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract(&self, encoded_document: &str) -> Result<String, StudyError> {
        let text = extract_text_from_base64(encoded_document)
            .map_err(|e| StudyError::Extraction(e.to_string()))?;
        info!(chars = text.len(), "extracted text from PDF");
        Ok(text)
    }
}
