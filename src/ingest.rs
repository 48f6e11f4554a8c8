//! Document ingestion
//!
//! Turns an uploaded file into the text the analyzer works on. Binary
//! formats are handled by external collaborators implementing
//! [`TextExtractor`]; the crate ships the plain-text one.

use crate::error::{FinePrintError, FinePrintResult};
use crate::logging::log_debug;
use std::path::Path;
use std::sync::Arc;

/// Characters shown when previewing extracted text.
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Extracts text from one family of file formats.
pub trait TextExtractor: Send + Sync {
    /// Whether this extractor handles the file.
    fn supports(&self, declared_type: &str, file_name: &str) -> bool;

    /// Read the file's text.
    ///
    /// # Errors
    ///
    /// Returns [`FinePrintError::Extraction`] when the bytes cannot be read.
    fn extract_text(
        &self,
        file_bytes: &[u8],
        declared_type: &str,
        file_name: &str,
    ) -> FinePrintResult<String>;
}

/// UTF-8 text files: `text/plain`, `.txt` and `.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn supports(&self, declared_type: &str, file_name: &str) -> bool {
        let mime = declared_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if mime == "text/plain" || mime == "text/markdown" {
            return true;
        }

        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "txt" | "md"))
            .unwrap_or(false)
    }

    fn extract_text(
        &self,
        file_bytes: &[u8],
        _declared_type: &str,
        file_name: &str,
    ) -> FinePrintResult<String> {
        let text = std::str::from_utf8(file_bytes)
            .map_err(|e| FinePrintError::extraction(file_name, format!("not valid UTF-8: {e}")))?;

        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }
}

/// Picks the first registered extractor that accepts a file.
#[derive(Clone)]
pub struct DocumentIngestor {
    extractors: Vec<Arc<dyn TextExtractor>>,
}

impl Default for DocumentIngestor {
    fn default() -> Self {
        Self {
            extractors: vec![Arc::new(PlainTextExtractor)],
        }
    }
}

impl DocumentIngestor {
    /// An ingestor with no extractors; add them with [`Self::with_extractor`].
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Register another extractor, consulted after the existing ones.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract text from an uploaded file.
    ///
    /// # Errors
    ///
    /// - [`FinePrintError::UnsupportedDocument`] if no extractor accepts it
    /// - [`FinePrintError::Extraction`] if the chosen extractor fails
    pub fn extract_text(
        &self,
        file_bytes: &[u8],
        declared_type: &str,
        file_name: &str,
    ) -> FinePrintResult<String> {
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.supports(declared_type, file_name))
            .ok_or_else(|| FinePrintError::unsupported_document(file_name, declared_type))?;

        let text = extractor.extract_text(file_bytes, declared_type, file_name)?;

        log_debug!(
            file_name = %file_name,
            declared_type = %declared_type,
            bytes = file_bytes.len(),
            chars = text.chars().count(),
            "Extracted document text"
        );

        Ok(text)
    }
}

/// First `limit` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, limit: usize) -> String {
    let prefix = crate::prompts::truncate_chars(text, limit);
    if prefix.len() < text.len() {
        format!("{prefix}...")
    } else {
        prefix.to_string()
    }
}
