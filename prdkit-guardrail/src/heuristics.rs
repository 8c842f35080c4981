//! Local pattern checks that need no network access.

use crate::verdict::{SafetyVerdict, flags};
use regex::RegexSet;
use std::sync::OnceLock;

/// Common prompt-injection and secret-fishing phrasings seen in business-input tools.
///
/// Secret words match whole words only: "users forget their password" is blocked,
/// "users forget passwords" and "tokenization" pass.
const INJECTION_PATTERNS: &[&str] = &[
    r"\bignore (all|any|the) (previous|prior) instructions\b",
    r"\bdisregard (all|any|the) (previous|prior) instructions\b",
    r"\byou are now\b",
    r"\bact as\b.*\b(system|developer)\b",
    r"\b(system|developer) prompt\b",
    r"\breveal\b.*\b(system prompt|hidden prompt|instructions)\b",
    r"\bprint\b.*\b(system prompt|developer message|secret)\b",
    r"\bapi[_ -]?key\b",
    r"\bpassword\b",
    r"\btoken\b",
    r"\bexfiltrate\b",
    r"\bdata leak\b",
    r"\bdo not follow\b",
    r"\boverride\b.*\brules\b",
];

/// Deliberately short; moderation covers the long tail.
const HARMFUL_HINTS: &[&str] =
    &[r"\bkill\b", r"\bmurder\b", r"\bweapon\b", r"\bbomb\b", r"\bsuicide\b", r"\bterror\b"];

pub(crate) const INJECTION_REASON: &str = "Potential prompt-injection detected. Please remove instructions like \
     'ignore previous instructions', references to system prompts, or requests for secrets.";
pub(crate) const HARMFUL_REASON: &str =
    "Potentially harmful content detected. Please provide business/product notes only.";
pub(crate) const EMPTY_REASON: &str = "Input is empty.";

static INJECTION_SET: OnceLock<RegexSet> = OnceLock::new();
static HARMFUL_SET: OnceLock<RegexSet> = OnceLock::new();

fn case_insensitive(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns.iter().map(|p| format!("(?i){p}"))).expect("Invalid regex pattern")
}

fn injection_set() -> &'static RegexSet {
    INJECTION_SET.get_or_init(|| case_insensitive(INJECTION_PATTERNS))
}

fn harmful_set() -> &'static RegexSet {
    HARMFUL_SET.get_or_init(|| case_insensitive(HARMFUL_HINTS))
}

/// Run the local checks.
///
/// Blank input is blocked outright. Otherwise every matching category is flagged and the
/// verdict's reason comes from the first blocking category: prompt injection, then harm.
pub fn heuristic_check(text: &str) -> SafetyVerdict {
    let text = text.trim();
    if text.is_empty() {
        return SafetyVerdict::block(EMPTY_REASON, vec![flags::EMPTY_INPUT.to_string()]);
    }

    let injection = injection_set().is_match(text);
    let harmful = harmful_set().is_match(text);

    let mut found = Vec::new();
    if injection {
        found.push(flags::PROMPT_INJECTION_PATTERN.to_string());
    }
    if harmful {
        found.push(flags::HARMFUL_HINT.to_string());
    }

    if injection {
        SafetyVerdict::block(INJECTION_REASON, found)
    } else if harmful {
        SafetyVerdict::block(HARMFUL_REASON, found)
    } else {
        SafetyVerdict::allow(found)
    }
}
