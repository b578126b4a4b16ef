//! Text Extractor — pulls lowercase plain text out of an uploaded resume PDF.
//!
//! An unreadable resume is a normal case, not a failure: the analyzer runs
//! degraded on whatever text is available (possibly none).

use tracing::warn;

/// Extracts all text from a PDF byte stream, lowercased.
/// Absent, empty, or unparseable input yields an empty string.
pub fn text_from_pdf(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text.to_lowercase(),
        Err(e) => {
            warn!("resume PDF unreadable, continuing without it: {e}");
            String::new()
        }
    }
}

/// Combines extracted resume text with the manual skills entry into the
/// candidate text the matcher runs against. Always lowercase.
pub fn candidate_text(resume_text: &str, manual_skills: &str) -> String {
    let combined = format!("{} {}", resume_text, manual_skills);
    combined.trim().to_lowercase()
}
