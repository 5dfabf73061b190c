//! The fixed ATS analysis prompt.
//!
//! Assembly is a pure, deterministic template fill: job description first,
//! resume second, instruction block last. Both inputs are interpolated
//! verbatim in a single pass; nothing is escaped, truncated, or re-scanned
//! after insertion, so the template's structure is distinguishable from
//! user content only by the surrounding literal markers.

const PROMPT_PREAMBLE: &str = "Act as an advanced ATS (Applicant Tracking System).\n\
Analyze the following resume against the job description.";

/// The four sections every analysis must contain.
const PROMPT_INSTRUCTIONS: &str = "Provide a response with:\n\
- Overall Score (Percentage)\n\
- Keyword Match (Missing high-priority skills)\n\
- Format Review\n\
- Increasing Your Score (3 actionable bullet points)";

pub fn build_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        "{PROMPT_PREAMBLE}\n\nJOB DESCRIPTION:\n{job_description}\n\nRESUME:\n{resume_text}\n\n{PROMPT_INSTRUCTIONS}\n"
    )
}
