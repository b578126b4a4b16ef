//! Prompt templates for the generative skill-gap analysis.
//!
//! The response contract is pinned: a single JSON object with `score`,
//! `matched`, `missing`, and a week-labelled `roadmap`. Anything else is
//! rejected at the boundary (see `analysis::jd::validate_analysis`).

pub const GAP_ANALYSIS_SYSTEM: &str = "You are a career-development analyst. \
You respond with a single valid JSON object and nothing else: no prose, no \
markdown outside the JSON values.";

pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Compare the candidate profile below against the job description and identify the skill gap.

Candidate resume text:
{resume_text}

Additional skills listed by the candidate:
{manual_skills}

Job description:
{job_description}

Return ONLY valid JSON with exactly this shape:
{
  "score": <integer 0-100 compatibility score>,
  "matched": ["<skills the candidate already has that the job needs>"],
  "missing": ["<skills the job needs that the candidate lacks>"],
  "roadmap": {
    "Week 1": "Master <skill> with [<course name>](<url>)",
    "Week 2": "Learn <skill> with [<course name>](<url>)",
    "Week 3": "Practice <skill> with [<course name>](<url>)",
    "Week 4": "Certify in <skill> with [<course name>](<url>)"
  }
}
CRITICAL: every roadmap week MUST contain a real, clickable Markdown link."#;

/// Fills the analysis prompt template.
pub fn gap_analysis_prompt(
    resume_text: &str,
    manual_skills: &str,
    job_description: &str,
) -> String {
    GAP_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{manual_skills}", manual_skills)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_three_inputs() {
        let prompt = gap_analysis_prompt("RESUME-MARKER", "SKILLS-MARKER", "JD-MARKER");
        assert!(prompt.contains("RESUME-MARKER"));
        assert!(prompt.contains("SKILLS-MARKER"));
        assert!(prompt.contains("JD-MARKER"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{manual_skills}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_pins_the_response_keys() {
        let prompt = gap_analysis_prompt("", "", "");
        for key in ["\"score\"", "\"matched\"", "\"missing\"", "\"roadmap\""] {
            assert!(prompt.contains(key), "prompt lost key {key}");
        }
    }
}
