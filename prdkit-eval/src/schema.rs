//! JSON schema sent with the evaluation request.

use crate::evaluation::{SCORE_MAX, SCORE_MIN};
use serde_json::{Value, json};

/// Name under which the evaluation schema is registered with the provider.
pub const EVALUATION_SCHEMA_NAME: &str = "prd_evaluation_schema";

/// Fields the model must return. `overall_score` is computed locally and is not among them.
pub const EVALUATION_FIELDS: [&str; 7] = [
    "clarity",
    "completeness",
    "measurability",
    "business_value",
    "strengths",
    "improvements",
    "summary",
];

pub fn evaluation_json_schema() -> Value {
    let score = |description: &str| {
        json!({
            "type": "number",
            "minimum": SCORE_MIN,
            "maximum": SCORE_MAX,
            "description": description,
        })
    };

    json!({
        "type": "object",
        "properties": {
            "clarity": score("How clear and understandable the PRD is (0-10)"),
            "completeness": score("How complete the PRD is (0-10)"),
            "measurability": score("How measurable the goals are (0-10)"),
            "business_value": score("How strong the business value is (0-10)"),
            "strengths": { "type": "array", "items": { "type": "string" } },
            "improvements": { "type": "array", "items": { "type": "string" } },
            "summary": { "type": "string" },
        },
        "required": EVALUATION_FIELDS,
        "additionalProperties": false,
    })
}
