//! Text renderings of a [`Prd`].

use crate::prd::Prd;
use std::fmt::Write;

/// Section headings in fixed order, used by both renderings.
const HEADINGS: [&str; 8] = [
    "Problem",
    "Users / Personas",
    "Goals (measurable)",
    "Scope (What we will build)",
    "Non-Scope (What we will NOT build)",
    "User Stories",
    "Risks",
    "Open Questions",
];

/// Deterministic plain-text rendering used inside the evaluation prompt.
///
/// Sections always appear, in fixed order; an empty one reads `(none)`.
pub fn prompt_text(prd: &Prd) -> String {
    let mut out = String::new();
    let problem = prd.problem_statement().trim();
    let _ = writeln!(out, "{}:", HEADINGS[0]);
    let _ = writeln!(out, "{}", if problem.is_empty() { "(none)" } else { problem });

    for (heading, (_, items)) in HEADINGS[1..].iter().zip(prd.sections()) {
        let _ = writeln!(out, "\n{heading}:");
        if items.is_empty() {
            let _ = writeln!(out, "(none)");
        }
        for item in items {
            let _ = writeln!(out, "- {item}");
        }
    }
    out
}

/// Markdown document suitable for export or display.
pub fn markdown(prd: &Prd) -> String {
    let mut out = String::from("# Product Requirements Document\n");
    let problem = prd.problem_statement().trim();
    let _ = write!(out, "\n## {}\n\n", HEADINGS[0]);
    let _ = writeln!(out, "{}", if problem.is_empty() { "_(empty)_" } else { problem });

    for (heading, (_, items)) in HEADINGS[1..].iter().zip(prd.sections()) {
        let _ = write!(out, "\n## {heading}\n\n");
        if items.is_empty() {
            out.push_str("_(none)_\n");
        }
        for item in items {
            let _ = writeln!(out, "- {item}");
        }
    }
    out
}
