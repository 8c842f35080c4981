//! The Product Requirements Document model.

use prdkit_core::{Result, parse_structured};
use serde::{Deserialize, Serialize};

/// Field names in their fixed serialization and rendering order.
pub const PRD_FIELDS: [&str; 8] = [
    "problem_statement",
    "users_personas",
    "goals",
    "scope",
    "non_scope",
    "user_stories",
    "risks",
    "open_questions",
];

/// A structured Product Requirements Document.
///
/// All eight fields are always present; any list may be empty. A `Prd` is never mutated
/// after construction: the `with_*` methods consume the value and return a new one.
///
/// Deserialization is strict. A missing key, a value of the wrong type or an unknown key
/// is an error, so a partially populated PRD cannot be produced from model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Prd {
    problem_statement: String,
    users_personas: Vec<String>,
    goals: Vec<String>,
    scope: Vec<String>,
    non_scope: Vec<String>,
    user_stories: Vec<String>,
    risks: Vec<String>,
    open_questions: Vec<String>,
}

impl Prd {
    /// A PRD with the given problem statement and every list empty.
    pub fn new(problem_statement: impl Into<String>) -> Self {
        Self { problem_statement: problem_statement.into(), ..Default::default() }
    }

    /// Parse a PRD from JSON text, tolerating a surrounding Markdown code fence.
    ///
    /// Fails with [`prdkit_core::PrdError::SchemaViolation`] carrying `raw` when the
    /// payload is not a complete PRD.
    pub fn from_json(raw: &str) -> Result<Self> {
        parse_structured(raw)
    }

    pub fn with_problem_statement(mut self, problem_statement: impl Into<String>) -> Self {
        self.problem_statement = problem_statement.into();
        self
    }

    pub fn with_users_personas(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.users_personas = collect(items);
        self
    }

    pub fn with_goals(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.goals = collect(items);
        self
    }

    pub fn with_scope(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scope = collect(items);
        self
    }

    pub fn with_non_scope(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.non_scope = collect(items);
        self
    }

    pub fn with_user_stories(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.user_stories = collect(items);
        self
    }

    pub fn with_risks(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.risks = collect(items);
        self
    }

    pub fn with_open_questions(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.open_questions = collect(items);
        self
    }

    pub fn problem_statement(&self) -> &str {
        &self.problem_statement
    }

    pub fn users_personas(&self) -> &[String] {
        &self.users_personas
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    pub fn non_scope(&self) -> &[String] {
        &self.non_scope
    }

    pub fn user_stories(&self) -> &[String] {
        &self.user_stories
    }

    pub fn risks(&self) -> &[String] {
        &self.risks
    }

    pub fn open_questions(&self) -> &[String] {
        &self.open_questions
    }

    /// The seven list sections paired with their field names, in fixed order.
    pub fn sections(&self) -> [(&'static str, &[String]); 7] {
        [
            ("users_personas", &self.users_personas),
            ("goals", &self.goals),
            ("scope", &self.scope),
            ("non_scope", &self.non_scope),
            ("user_stories", &self.user_stories),
            ("risks", &self.risks),
            ("open_questions", &self.open_questions),
        ]
    }

    /// True when the problem statement is blank and every list is empty.
    pub fn is_empty(&self) -> bool {
        self.problem_statement.trim().is_empty() && self.sections().iter().all(|(_, items)| items.is_empty())
    }

    /// Pretty-printed JSON with fields in their fixed order.
    pub fn to_json_pretty(&self) -> String {
        // A struct of strings and string lists always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn collect(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prdkit_core::ErrorKind;

    fn login_prd() -> Prd {
        Prd::new("Users forget passwords frequently, impacting login success.")
            .with_goals(["Reduce password-reset support burden", "Improve login success rate"])
    }

    #[test]
    fn test_builder_produces_new_values() {
        let base = login_prd();
        let edited = base.clone().with_risks(["Account takeover via reset flow"]);

        assert!(base.risks().is_empty());
        assert_eq!(edited.risks(), ["Account takeover via reset flow"]);
        assert_eq!(edited.goals(), base.goals());
    }

    #[test]
    fn test_serializes_all_fields_in_order() {
        let json = serde_json::to_string(&Prd::new("p")).unwrap();
        let positions: Vec<usize> =
            PRD_FIELDS.iter().map(|f| json.find(&format!("\"{f}\"")).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let raw = r#"{"problem_statement":"p","users_personas":[],"goals":[],"scope":[],
            "non_scope":[],"user_stories":[],"open_questions":[]}"#;
        let err = Prd::from_json(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
        assert!(err.to_string().contains("risks"));
        assert_eq!(err.payload(), Some(raw));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let mut value = serde_json::to_value(Prd::new("p")).unwrap();
        value["priority"] = serde_json::json!("high");
        let err = Prd::from_json(&value.to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        let mut value = serde_json::to_value(Prd::new("p")).unwrap();
        value["goals"] = serde_json::json!("one goal");
        assert!(Prd::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_pretty_json_reparses() {
        let prd = login_prd().with_user_stories(["As a user, I want a reset link, so that I can log in"]);
        assert_eq!(Prd::from_json(&prd.to_json_pretty()).unwrap(), prd);
    }

    #[test]
    fn test_is_empty() {
        assert!(Prd::default().is_empty());
        assert!(Prd::new("   ").is_empty());
        assert!(!Prd::default().with_open_questions(["Who owns this?"]).is_empty());
    }
}
