use serde::Serialize;

/// Flag names attached to a [`SafetyVerdict`].
pub mod flags {
    pub const EMPTY_INPUT: &str = "empty_input";
    pub const PROMPT_INJECTION_PATTERN: &str = "prompt_injection_pattern";
    pub const HARMFUL_HINT: &str = "harmful_hint";
    pub const MODERATION_FLAGGED: &str = "moderation_flagged";
    pub const MODERATION_OK: &str = "moderation_ok";
    pub const MODERATION_UNAVAILABLE: &str = "moderation_unavailable";
}

/// Outcome of a safety check.
///
/// `reason` is set exactly when the input is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyVerdict {
    pub ok: bool,
    pub reason: Option<String>,
    pub flags: Vec<String>,
}

impl SafetyVerdict {
    pub fn allow(flags: Vec<String>) -> Self {
        Self { ok: true, reason: None, flags }
    }

    pub fn block(reason: impl Into<String>, flags: Vec<String>) -> Self {
        Self { ok: false, reason: Some(reason.into()), flags }
    }

    pub fn is_blocked(&self) -> bool {
        !self.ok
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}
