use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::AppError;

/// The model used for every analysis. Hardcoded so that scores stay
/// comparable across submissions.
pub const MODEL: &str = "gemini-2.5-flash";

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no usable text")]
    Empty,
}

impl From<GeminiError> for AppError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Empty => AppError::EmptyAnalysis,
            other => AppError::GenerationFailed {
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, if any.
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let parts = candidate.content?.parts;

        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Constructed once at startup and injected through application state.
/// Makes exactly one attempt per submission; every failure is reported to
/// the caller verbatim and never retried.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout_seconds: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_seconds))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Send one prompt and return the model's text response.
    ///
    /// The prompt is passed through whole; any input-size limit is the
    /// provider's and surfaces here as an API error.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = format!("{}/{}:generateContent", GEMINI_API_URL, MODEL);

        debug!(model = MODEL, prompt_chars = prompt.len(), "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error envelope
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;

        let text = generate_response.text().ok_or(GeminiError::Empty)?;

        debug!(response_chars = text.len(), "Gemini call succeeded");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Overall "},{"text":"Score: 85%"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Overall Score: 85%"));
    }

    #[test]
    fn blank_response_counts_as_empty() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#,
        )
        .unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn missing_candidates_counts_as_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn error_envelope_is_parsed() {
        let err: GeminiApiError = serde_json::from_str(
            r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#,
        )
        .unwrap();
        assert_eq!(err.error.message, "Resource has been exhausted");
    }

    #[test]
    fn empty_maps_to_distinct_app_error() {
        let app: AppError = GeminiError::Empty.into();
        assert_eq!(app.error_code(), "EMPTY_ANALYSIS");

        let app: AppError = GeminiError::Api {
            status: 503,
            message: "model unavailable".to_string(),
        }
        .into();
        assert_eq!(app.error_code(), "GENERATION_FAILED");
        assert!(app.to_string().contains("model unavailable"));
    }
}
