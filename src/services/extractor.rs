use thiserror::Error;
use tracing::info;

use crate::error::AppError;
use crate::models::{DocumentKind, UploadedDocument};

use super::{docx, pdf};

/// Extractions whose trimmed length falls below this are treated as
/// unreadable (a scanned image or an effectively empty document), not as a
/// valid empty resume.
pub const MIN_RESUME_CHARS: usize = 10;

/// A document the underlying parser could not open at all. Failures inside
/// an otherwise parseable document (a bad page, a broken run) never surface
/// here; they just contribute no text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to open DOCX archive: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("failed to parse DOCX document: {0}")]
    DocxXml(#[from] quick_xml::Error),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::ExtractionFailed {
            message: err.to_string(),
        }
    }
}

/// Turn an uploaded document into plain text.
///
/// Pure transformation of the document's bytes; the document itself is
/// never modified, and extracting twice yields identical output. An
/// unsupported kind yields an empty string regardless of content — the
/// caller decides how to report that.
pub fn extract_text(document: &UploadedDocument) -> Result<String, ExtractError> {
    let text = match document.kind {
        DocumentKind::Pdf => pdf::extract_pdf(&document.bytes)?,
        DocumentKind::Docx => docx::extract_docx(&document.bytes)?,
        DocumentKind::Unsupported => String::new(),
    };

    info!(
        file_name = %document.name,
        format = document.kind.as_str(),
        extracted_chars = text.len(),
        "Text extraction completed"
    );

    Ok(text)
}
