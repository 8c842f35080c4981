//! The combined gate: heuristics, then optional moderation.

use crate::heuristics::heuristic_check;
use crate::verdict::{SafetyVerdict, flags};
use prdkit_model::Moderator;
use prdkit_telemetry::safety_check_span;
use std::sync::Arc;
use tracing::{Instrument, debug, warn};

pub(crate) const MODERATION_REASON: &str =
    "Input was flagged by moderation. Please provide business/product notes only.";

/// Gate applied to notes before they are sent for generation.
///
/// Without a moderator only the local heuristics run. With one, input that passes the
/// heuristics is also sent for moderation; if the moderation service cannot be reached
/// the input is allowed and tagged `moderation_unavailable`.
#[derive(Default, Clone)]
pub struct SafetyGuard {
    moderator: Option<Arc<dyn Moderator>>,
}

impl SafetyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moderator(mut self, moderator: Arc<dyn Moderator>) -> Self {
        self.moderator = Some(moderator);
        self
    }

    pub fn moderation_enabled(&self) -> bool {
        self.moderator.is_some()
    }

    pub async fn check(&self, text: &str) -> SafetyVerdict {
        let span = safety_check_span(text.len());
        async {
            let verdict = heuristic_check(text);
            if verdict.is_blocked() {
                warn!(flags = ?verdict.flags, "input blocked by heuristics");
                return verdict;
            }

            let Some(moderator) = &self.moderator else {
                return verdict;
            };

            let mut found = verdict.flags;
            match moderator.moderate(text).await {
                Ok(outcome) if outcome.flagged => {
                    warn!(categories = ?outcome.categories, "input flagged by moderation");
                    SafetyVerdict::block(MODERATION_REASON, vec![flags::MODERATION_FLAGGED.to_string()])
                }
                Ok(_) => {
                    found.push(flags::MODERATION_OK.to_string());
                    SafetyVerdict::allow(found)
                }
                Err(e) => {
                    debug!(error = %e, "moderation unavailable, allowing input");
                    found.push(flags::MODERATION_UNAVAILABLE.to_string());
                    SafetyVerdict::allow(found)
                }
            }
        }
        .instrument(span)
        .await
    }
}
