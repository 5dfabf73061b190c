//! Vitae Resume Analysis Service
//!
//! A small Rust service that scores a resume against a job description:
//! extract the document's text, assemble a fixed ATS-style prompt, and ask
//! the Gemini API for the analysis.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
