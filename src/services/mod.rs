pub mod docx;
pub mod extractor;
pub mod gemini;
pub mod pdf;
pub mod prompt;

pub use extractor::{extract_text, ExtractError, MIN_RESUME_CHARS};
pub use gemini::{GeminiClient, GeminiError};
pub use prompt::build_prompt;
