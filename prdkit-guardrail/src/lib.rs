//! # prdkit-guardrail
//!
//! Screens notes before they reach the model.
//!
//! Checks run in order and stop at the first block:
//!
//! 1. blank input
//! 2. prompt-injection phrasings
//! 3. obviously harmful intent
//! 4. a [`Moderator`](prdkit_model::Moderator), when configured (fails open)
//!
//! ```rust,ignore
//! use prdkit_guardrail::SafetyGuard;
//!
//! let verdict = SafetyGuard::new().check(notes).await;
//! if !verdict.ok {
//!     eprintln!("{}", verdict.reason.unwrap_or_default());
//! }
//! ```

mod guard;
mod heuristics;
mod verdict;

pub use guard::SafetyGuard;
pub use heuristics::heuristic_check;
pub use verdict::{SafetyVerdict, flags};
