//! # prdkit-eval
//!
//! LLM-judged quality evaluation of Product Requirements Documents.
//!
//! A [`PrdEvaluator`] asks the model for four sub-scores on a 0–10 scale plus strengths,
//! improvements and a summary. Scores are validated locally; `overall_score` is the
//! unweighted mean of the sub-scores rounded to one decimal place.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prdkit_eval::{PrdEvaluator, ScoredPrd};
//!
//! let evaluator = PrdEvaluator::new(llm.clone());
//! let evaluation = evaluator.evaluate_with_notes(&prd, Some(notes)).await?;
//! println!("{}", prdkit_eval::report::markdown(&evaluation));
//! let scored = ScoredPrd::new(prd, evaluation);
//! ```

pub mod evaluation;
pub mod evaluator;
pub mod prompts;
pub mod report;
pub mod schema;
mod scored;

pub use evaluation::{Evaluation, SCORE_MAX, SCORE_MIN, Scores, in_bounds};
pub use evaluator::{DEFAULT_EVALUATOR_TEMPERATURE, EvaluatorConfig, PrdEvaluator, evaluate_prd};
pub use schema::{EVALUATION_SCHEMA_NAME, evaluation_json_schema};
pub use scored::ScoredPrd;
