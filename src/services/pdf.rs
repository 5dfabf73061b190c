use lopdf::Document;
use tracing::{debug, warn};

use super::extractor::ExtractError;

/// Extract the text of every page of a PDF, in document order.
///
/// A page whose content cannot be decoded contributes nothing; only a file
/// that `lopdf` cannot open at all is an error. Page texts are concatenated
/// exactly as the parser yields them, with no separators added between
/// pages.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)?;

    let pages = document.get_pages();
    debug!(pages = pages.len(), "Loaded PDF document");

    let mut text = String::new();
    for (page_number, _object_id) in pages {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                warn!(
                    page = page_number,
                    error = %e,
                    "Skipping page with unreadable content"
                );
            }
        }
    }

    Ok(text)
}
