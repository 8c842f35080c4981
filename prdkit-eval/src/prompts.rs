//! Prompt text for PRD evaluation.

use prdkit_prd::{Prd, render};

/// System prompt: a strict but fair product reviewer.
pub const SYSTEM_PROMPT: &str = "\
You are a senior Product Manager and Product Quality Reviewer.

Your job is to evaluate the quality of Product Requirements Documents (PRDs).

Evaluation principles:
- Be strict but fair.
- Score clarity, completeness, measurability and business value, each from 0 to 10.
- Give short, actionable feedback.
- Do not hallucinate missing information. If something is missing, say so in improvements.
- A document with empty or missing sections must score low, and the summary must say it is incomplete.

Return valid JSON only.";

/// User prompt embedding the rendered PRD and, when given, the notes it came from.
pub fn user_prompt(prd: &Prd, original_notes: Option<&str>) -> String {
    let mut prompt = format!(
        "Evaluate the following PRD.\n\nReturn evaluation scores and improvement suggestions.\n\nPRD:\n{}",
        render::prompt_text(prd)
    );
    if let Some(notes) = original_notes.map(str::trim).filter(|n| !n.is_empty()) {
        prompt.push_str("\nORIGINAL NOTES:\n");
        prompt.push_str(notes);
        prompt.push('\n');
    }
    prompt
}
