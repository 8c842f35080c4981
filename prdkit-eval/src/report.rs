//! Markdown rendering of an [`Evaluation`].

use crate::evaluation::{Evaluation, SCORE_MAX};
use std::fmt::Write;

/// Score table followed by strengths, improvements and the summary.
pub fn markdown(evaluation: &Evaluation) -> String {
    let mut out = String::from("# PRD Quality Evaluation\n\n");
    out.push_str("| Dimension | Score |\n|---|---|\n");
    let rows = [
        ("Clarity", evaluation.clarity()),
        ("Completeness", evaluation.completeness()),
        ("Measurability", evaluation.measurability()),
        ("Business value", evaluation.business_value()),
        ("**Overall**", evaluation.overall_score()),
    ];
    for (label, score) in rows {
        let _ = writeln!(out, "| {label} | {score:.1} / {SCORE_MAX:.0} |");
    }

    list_section(&mut out, "Strengths", evaluation.strengths());
    list_section(&mut out, "Improvements", evaluation.improvements());

    out.push_str("\n## Summary\n\n");
    let summary = evaluation.summary().trim();
    let _ = writeln!(out, "{}", if summary.is_empty() { "_(empty)_" } else { summary });
    out
}

fn list_section(out: &mut String, heading: &str, items: &[String]) {
    let _ = write!(out, "\n## {heading}\n\n");
    if items.is_empty() {
        out.push_str("_(none)_\n");
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
