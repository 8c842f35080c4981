//! Evaluator behaviour against a scripted model, plus the full notes → PRD → evaluation run.

use prdkit_core::{ErrorKind, Llm};
use prdkit_eval::{
    EVALUATION_SCHEMA_NAME, PrdEvaluator, SCORE_MAX, SCORE_MIN, ScoredPrd, evaluate_prd, in_bounds,
};
use prdkit_model::MockLlm;
use prdkit_prd::{Prd, PrdGenerator};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn evaluation_payload(clarity: f64, completeness: f64, measurability: f64, business_value: f64) -> String {
    json!({
        "clarity": clarity,
        "completeness": completeness,
        "measurability": measurability,
        "business_value": business_value,
        "strengths": ["Problem is stated plainly"],
        "improvements": ["Add explicit success metrics"],
        "summary": "Usable draft with gaps."
    })
    .to_string()
}

// ============================================================================
// Score bounds
// ============================================================================

#[tokio::test]
async fn clarity_above_scale_is_rejected() {
    let mock = MockLlm::new("stub").with_text(evaluation_payload(15.0, 5.0, 5.0, 5.0));

    let err = evaluate_prd(&mock, &Prd::new("Checkout is slow.")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert!(err.to_string().contains("clarity"));
}

fn arb_score() -> impl Strategy<Value = f64> {
    SCORE_MIN..=SCORE_MAX
}

fn arb_off_scale() -> impl Strategy<Value = f64> {
    prop_oneof![-1000.0..-0.001f64, 10.001..1000.0f64]
}

proptest! {
    #[test]
    fn in_range_scores_are_accepted(
        c in arb_score(), k in arb_score(), m in arb_score(), b in arb_score()
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mock = MockLlm::new("stub").with_text(evaluation_payload(c, k, m, b));

        let evaluation = runtime.block_on(evaluate_prd(&mock, &Prd::default())).unwrap();

        for (_, score) in evaluation.scores().named() {
            prop_assert!(in_bounds(score));
        }
        prop_assert!(in_bounds(evaluation.overall_score()));
    }

    #[test]
    fn any_off_scale_score_is_rejected(
        bad in arb_off_scale(), position in 0usize..4, fill in arb_score()
    ) {
        let mut scores = [fill; 4];
        scores[position] = bad;
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mock = MockLlm::new("stub")
            .with_text(evaluation_payload(scores[0], scores[1], scores[2], scores[3]));

        let err = runtime.block_on(evaluate_prd(&mock, &Prd::default())).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }
}

// ============================================================================
// Degenerate and failing inputs
// ============================================================================

#[tokio::test]
async fn empty_prd_is_still_scored() {
    let mock = Arc::new(MockLlm::new("stub").with_text(
        json!({
            "clarity": 1,
            "completeness": 0,
            "measurability": 0,
            "business_value": 1,
            "strengths": [],
            "improvements": ["State the problem being solved", "Add goals and scope"],
            "summary": "The document is empty and cannot be assessed meaningfully."
        })
        .to_string(),
    ));
    let evaluator = PrdEvaluator::new(mock.clone());

    let evaluation = evaluator.evaluate(&Prd::default()).await.unwrap();

    assert_eq!(evaluation.overall_score(), 0.5);
    assert!(evaluation.strengths().is_empty());
    let prompt = mock.requests()[0].contents[1].text();
    assert_eq!(prompt.matches("(none)").count(), 8);
}

#[tokio::test]
async fn missing_summary_is_rejected() {
    let mock = MockLlm::new("stub").with_text(
        json!({
            "clarity": 5, "completeness": 5, "measurability": 5, "business_value": 5,
            "strengths": [], "improvements": []
        })
        .to_string(),
    );
    let err = evaluate_prd(&mock, &Prd::new("p")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
}

#[tokio::test]
async fn service_failure_propagates() {
    let mock = MockLlm::new("stub").with_failure("503 upstream");
    let err = evaluate_prd(&mock, &Prd::new("p")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn evaluation_does_not_touch_the_prd() {
    let prd = Prd::new("Checkout is slow.").with_goals(["Cut checkout time to under 3s"]);
    let before = prd.clone();
    let mock = MockLlm::new("stub").with_text(evaluation_payload(6.0, 5.0, 7.0, 6.0));

    evaluate_prd(&mock, &prd).await.unwrap();

    assert_eq!(prd, before);
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn login_notes_to_scored_prd() {
    let notes = "We need a login page. Users are forgetting passwords a lot.";
    let prd_payload = json!({
        "problem_statement": "Users forget passwords frequently, impacting login success.",
        "users_personas": [],
        "goals": ["Reduce password-reset support burden", "Improve login success rate"],
        "scope": [],
        "non_scope": [],
        "user_stories": [],
        "risks": [],
        "open_questions": []
    });
    let evaluation_payload = json!({
        "clarity": 6,
        "completeness": 3,
        "measurability": 2,
        "business_value": 6,
        "strengths": ["Problem is tied to a measurable outcome"],
        "improvements": ["Add explicit success metrics", "Define target users"],
        "summary": "Clear problem, but most sections are empty."
    });

    let mock = Arc::new(
        MockLlm::new("gpt-4.1-mini")
            .with_text(prd_payload.to_string())
            .with_text(evaluation_payload.to_string()),
    );
    let llm: Arc<dyn Llm> = mock.clone();
    let generator = PrdGenerator::new(llm.clone());
    let evaluator = PrdEvaluator::new(llm);

    let prd = generator.generate(notes).await.unwrap();
    let evaluation = evaluator.evaluate_with_notes(&prd, Some(notes)).await.unwrap();
    let scored = ScoredPrd::new(prd, evaluation);

    assert_eq!(mock.call_count(), 2);
    assert_eq!(
        scored.prd().problem_statement(),
        "Users forget passwords frequently, impacting login success."
    );
    assert!(scored.prd().risks().is_empty());
    assert_eq!(scored.evaluation().completeness(), 3.0);
    assert!(
        scored
            .evaluation()
            .improvements()
            .iter()
            .any(|i| i == "Add explicit success metrics")
    );
    assert_eq!(scored.evaluation().overall_score(), 4.3);

    let requests = mock.requests();
    let evaluation_request = &requests[1];
    assert_eq!(
        evaluation_request.config.as_ref().unwrap().response_schema_name.as_deref(),
        Some(EVALUATION_SCHEMA_NAME)
    );
    let prompt = evaluation_request.contents[1].text();
    assert!(prompt.contains("- Improve login success rate"));
    assert!(prompt.contains(&format!("ORIGINAL NOTES:\n{notes}")));

    let exported = serde_json::to_value(&scored).unwrap();
    assert_eq!(exported["evaluation"]["completeness"], json!(3.0));
    assert_eq!(exported["prd"]["goals"][1], "Improve login success rate");
}
