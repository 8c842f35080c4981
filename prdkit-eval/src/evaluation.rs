//! Evaluation results and the score scale.

use prdkit_core::{PrdError, Result, parse_structured};
use serde::{Deserialize, Serialize};

/// Lowest valid score.
pub const SCORE_MIN: f64 = 0.0;
/// Highest valid score.
pub const SCORE_MAX: f64 = 10.0;

/// Whether `score` lies on the scale. NaN and infinities never do.
pub fn in_bounds(score: f64) -> bool {
    score.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&score)
}

/// The four scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub clarity: f64,
    pub completeness: f64,
    pub measurability: f64,
    pub business_value: f64,
}

impl Scores {
    pub fn new(clarity: f64, completeness: f64, measurability: f64, business_value: f64) -> Self {
        Self { clarity, completeness, measurability, business_value }
    }

    /// Dimension names paired with their scores.
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("clarity", self.clarity),
            ("completeness", self.completeness),
            ("measurability", self.measurability),
            ("business_value", self.business_value),
        ]
    }

    /// Unweighted mean of the four scores, rounded to one decimal place.
    pub fn overall(&self) -> f64 {
        let mean = self.named().iter().map(|(_, s)| s).sum::<f64>() / 4.0;
        (mean * 10.0).round() / 10.0
    }

    /// First dimension whose score is off the scale.
    fn first_out_of_bounds(&self) -> Option<(&'static str, f64)> {
        self.named().into_iter().find(|(_, score)| !in_bounds(*score))
    }
}

/// Structured quality assessment of one PRD.
///
/// `overall_score` is derived from the four sub-scores, never supplied. Every score is
/// within [`SCORE_MIN`]..=[`SCORE_MAX`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    clarity: f64,
    completeness: f64,
    measurability: f64,
    business_value: f64,
    overall_score: f64,
    strengths: Vec<String>,
    improvements: Vec<String>,
    summary: String,
}

impl Evaluation {
    /// Build an evaluation, rejecting scores off the scale with
    /// [`PrdError::SchemaViolation`]. The payload is the scores as JSON.
    pub fn new(
        scores: Scores,
        strengths: Vec<String>,
        improvements: Vec<String>,
        summary: impl Into<String>,
    ) -> Result<Self> {
        if let Some((name, score)) = scores.first_out_of_bounds() {
            let payload = serde_json::to_string(&scores).unwrap_or_default();
            return Err(PrdError::schema_violation(out_of_bounds_message(name, score), payload));
        }
        Ok(Self::from_valid(scores, strengths, improvements, summary.into()))
    }

    /// Parse model output, enforcing field presence, types and score bounds.
    ///
    /// Every failure is [`PrdError::SchemaViolation`] carrying `raw`.
    pub fn from_model_output(raw: &str) -> Result<Self> {
        let payload: EvaluationPayload = parse_structured(raw)?;
        let scores = Scores::new(
            payload.clarity,
            payload.completeness,
            payload.measurability,
            payload.business_value,
        );
        if let Some((name, score)) = scores.first_out_of_bounds() {
            return Err(PrdError::schema_violation(out_of_bounds_message(name, score), raw));
        }
        Ok(Self::from_valid(scores, payload.strengths, payload.improvements, payload.summary))
    }

    fn from_valid(scores: Scores, strengths: Vec<String>, improvements: Vec<String>, summary: String) -> Self {
        Self {
            clarity: scores.clarity,
            completeness: scores.completeness,
            measurability: scores.measurability,
            business_value: scores.business_value,
            overall_score: scores.overall(),
            strengths,
            improvements,
            summary,
        }
    }

    pub fn clarity(&self) -> f64 {
        self.clarity
    }

    pub fn completeness(&self) -> f64 {
        self.completeness
    }

    pub fn measurability(&self) -> f64 {
        self.measurability
    }

    pub fn business_value(&self) -> f64 {
        self.business_value
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn scores(&self) -> Scores {
        Scores::new(self.clarity, self.completeness, self.measurability, self.business_value)
    }

    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // Finite floats, strings and lists always serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Shape of the evaluator's model output.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EvaluationPayload {
    clarity: f64,
    completeness: f64,
    measurability: f64,
    business_value: f64,
    strengths: Vec<String>,
    improvements: Vec<String>,
    summary: String,
}

fn out_of_bounds_message(name: &str, score: f64) -> String {
    format!("{name} score {score} is outside {SCORE_MIN}..={SCORE_MAX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use prdkit_core::ErrorKind;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "clarity": 7,
            "completeness": 3,
            "measurability": 4.5,
            "business_value": 6,
            "strengths": ["Clear problem statement"],
            "improvements": ["Add explicit success metrics"],
            "summary": "A reasonable start."
        })
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        assert_eq!(Scores::new(7.0, 3.0, 4.5, 6.0).overall(), 5.1);
        assert_eq!(Scores::new(10.0, 10.0, 10.0, 10.0).overall(), 10.0);
        assert_eq!(Scores::new(0.0, 0.0, 0.0, 0.1).overall(), 0.0);
        assert_eq!(Scores::new(1.0, 2.0, 2.0, 2.0).overall(), 1.8);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0.0));
        assert!(in_bounds(10.0));
        assert!(!in_bounds(-0.1));
        assert!(!in_bounds(10.01));
        assert!(!in_bounds(f64::NAN));
        assert!(!in_bounds(f64::INFINITY));
    }

    #[test]
    fn test_from_model_output() {
        let evaluation = Evaluation::from_model_output(&payload().to_string()).unwrap();
        assert_eq!(evaluation.completeness(), 3.0);
        assert_eq!(evaluation.measurability(), 4.5);
        assert_eq!(evaluation.overall_score(), 5.1);
        assert_eq!(evaluation.improvements(), ["Add explicit success metrics"]);
    }

    #[test]
    fn test_out_of_range_score_is_schema_violation() {
        let mut value = payload();
        value["clarity"] = json!(15);
        let raw = value.to_string();

        let err = Evaluation::from_model_output(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
        assert!(err.to_string().contains("clarity"));
        assert_eq!(err.payload(), Some(raw.as_str()));
    }

    #[test]
    fn test_model_supplied_overall_is_rejected() {
        let mut value = payload();
        value["overall_score"] = json!(9);
        let err = Evaluation::from_model_output(&value.to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_string_score_is_schema_violation() {
        let mut value = payload();
        value["business_value"] = json!("high");
        let err = Evaluation::from_model_output(&value.to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Evaluation::new(Scores::new(5.0, -1.0, 5.0, 5.0), vec![], vec![], "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
        assert!(err.to_string().contains("completeness"));
        assert!(err.payload().unwrap().contains("\"completeness\":-1.0"));
    }

    #[test]
    fn test_scores_serialize_by_dimension() {
        let value = serde_json::to_value(Scores::new(6.0, 3.0, 2.0, 6.0)).unwrap();
        assert_eq!(value, json!({"clarity": 6.0, "completeness": 3.0, "measurability": 2.0, "business_value": 6.0}));
    }

    #[test]
    fn test_serialized_shape() {
        let evaluation = Evaluation::from_model_output(&payload().to_string()).unwrap();
        let value = serde_json::to_value(&evaluation).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 8);
        assert_eq!(value["overall_score"], json!(5.1));
        assert_eq!(value["summary"], "A reasonable start.");
    }
}
