use serde::{Deserialize, Serialize};

use crate::models::request::UploadedDocument;

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisData,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisData {
    /// The model's analysis text, passed through verbatim.
    pub analysis: String,
    pub model: String,
    pub document: DocumentSummary,
}

/// What the service understood about the upload, echoed back so the client
/// can sanity-check that the right file was analyzed.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub file_name: String,
    pub format: String,
    pub size_bytes: usize,
    pub extracted_chars: usize,
}

impl AnalyzeResponse {
    pub fn new(
        analysis: String,
        model: &str,
        document: DocumentSummary,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            success: true,
            data: AnalysisData {
                analysis,
                model: model.to_string(),
                document,
            },
            processing_time_ms,
        }
    }
}

impl DocumentSummary {
    pub fn new(document: &UploadedDocument, extracted_chars: usize) -> Self {
        Self {
            file_name: document.name.clone(),
            format: document.kind.as_str().to_string(),
            size_bytes: document.size,
            extracted_chars,
        }
    }
}
