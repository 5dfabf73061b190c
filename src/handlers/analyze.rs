use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AnalyzeResponse, DocumentKind, DocumentSummary, UploadedDocument};
use crate::services::{self, gemini::MODEL, MIN_RESUME_CHARS};
use crate::state::AppState;

/// One complete submission: extract the resume's text, assemble the fixed
/// ATS prompt, and hand it to the model. Every failure is terminal for the
/// submission and surfaces as an error response; nothing is retried.
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AnalyzeResponse>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

    info!(request_id = %request_id, "Starting resume analysis request");

    // Claim a concurrency slot for the whole submission
    let _permit = state.limiter.acquire().map_err(|e| {
        warn!(request_id = %request_id, "Rate limit exceeded");
        e
    })?;

    let submission = match parse_submission(&mut multipart).await {
        Ok(submission) => {
            info!(
                request_id = %request_id,
                file_name = %submission.document.name,
                file_size = submission.document.size,
                content_type = submission.document.declared_type(),
                "Submission parsed from multipart form"
            );
            submission
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to parse submission");
            return Err(e);
        }
    };

    let max_size_bytes = state.config.max_file_size_mb * 1024 * 1024;
    if submission.document.size > max_size_bytes {
        warn!(
            request_id = %request_id,
            file_size = submission.document.size,
            max_size = max_size_bytes,
            "File size exceeds limit"
        );
        return Err(AppError::FileTooLarge {
            // Round up so a file just over the limit never reports the
            // limit itself as its size
            size: submission.document.size.div_ceil(1024 * 1024),
            limit: state.config.max_file_size_mb,
        });
    }

    let resume_text = match services::extract_text(&submission.document) {
        Ok(text) => text,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Document extraction failed");
            return Err(e.into());
        }
    };

    // An unsupported format and a scanned image both yield (near-)empty
    // text; report them as two distinct conditions.
    if submission.document.kind == DocumentKind::Unsupported {
        warn!(
            request_id = %request_id,
            content_type = submission.document.declared_type(),
            "Unsupported document format"
        );
        return Err(AppError::UnsupportedFormat {
            content_type: submission.document.declared_type().to_string(),
        });
    }

    let extracted_chars = resume_text.trim().len();
    if extracted_chars < MIN_RESUME_CHARS {
        warn!(
            request_id = %request_id,
            extracted_chars = extracted_chars,
            "Extracted text below readability threshold"
        );
        return Err(AppError::UnreadableDocument {
            chars: extracted_chars,
        });
    }

    let prompt = services::build_prompt(&submission.job_description, &resume_text);
    debug!(request_id = %request_id, prompt_chars = prompt.len(), "Prompt assembled");

    let analysis = match state.gemini.generate(&prompt).await {
        Ok(analysis) => {
            info!(
                request_id = %request_id,
                analysis_chars = analysis.len(),
                "Analysis received from model"
            );
            analysis
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Generation call failed");
            return Err(e.into());
        }
    };

    let total_time = start.elapsed().as_millis() as u64;

    let document = DocumentSummary::new(&submission.document, resume_text.len());
    let response = AnalyzeResponse::new(analysis, MODEL, document, total_time);

    info!(
        request_id = %request_id,
        total_time_ms = total_time,
        "Request completed successfully"
    );

    Ok(Json(response))
}

struct Submission {
    document: UploadedDocument,
    job_description: String,
}

/// Walk the multipart form and pull out the resume file and the job
/// description text. Both must be present before any extraction happens.
async fn parse_submission(multipart: &mut Multipart) -> AppResult<Submission> {
    let mut document: Option<UploadedDocument> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::invalid_file(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::invalid_file(format!("Failed to read file data: {}", e))
                })?;

                if data.is_empty() {
                    return Err(AppError::invalid_file("File is empty"));
                }

                document = Some(UploadedDocument::new(file_name, content_type, data));
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::invalid_file(format!("Failed to read job description: {}", e))
                })?;
                job_description = Some(text);
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let document = document.ok_or(AppError::MissingFile)?;

    let job_description = job_description.unwrap_or_default();
    if job_description.trim().is_empty() {
        return Err(AppError::MissingJobDescription);
    }

    Ok(Submission {
        document,
        job_description,
    })
}
