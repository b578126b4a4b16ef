//! Plain-text report encoding: human-readable, one line per skill.

use crate::report::ReportInput;

pub fn render(input: &ReportInput) -> String {
    let mut out = String::new();

    out.push_str(super::REPORT_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        input.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("Target: {}\n", input.target));
    out.push_str(&format!("Compatibility Score: {}%\n", input.score));
    out.push('\n');

    out.push_str("MISSING SKILLS:\n");
    if input.missing.is_empty() {
        out.push_str("None - you cover every skill this target asks for.\n");
    } else {
        for skill in &input.missing {
            out.push_str(&format!("- {skill}\n"));
        }
    }
    out.push('\n');

    out.push_str("LEARNING ROADMAP:\n");
    if input.roadmap.is_empty() {
        out.push_str("No roadmap needed - you are fully qualified.\n");
    } else {
        for line in &input.roadmap {
            out.push_str(&format!("{}: {}\n", line.label, line.detail));
        }
    }

    out
}
