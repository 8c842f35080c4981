//! JSON schema sent with the generation request.

use crate::prd::PRD_FIELDS;
use serde_json::{Map, Value, json};

/// Name under which the PRD schema is registered with the provider.
pub const PRD_SCHEMA_NAME: &str = "prd_schema";

/// JSON schema describing [`crate::Prd`]: a flat object with every field required.
pub fn prd_json_schema() -> Value {
    let string_list = |description: &str| {
        json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description,
        })
    };

    let mut properties = Map::new();
    properties.insert(
        "problem_statement".into(),
        json!({
            "type": "string",
            "description": "The problem being solved and who has it",
        }),
    );
    properties.insert("users_personas".into(), string_list("Target users and personas"));
    properties.insert("goals".into(), string_list("Goals, measurable where possible"));
    properties.insert("scope".into(), string_list("What will be built"));
    properties.insert("non_scope".into(), string_list("What will explicitly not be built"));
    properties.insert(
        "user_stories".into(),
        string_list("User stories in the form 'As a ..., I want ..., so that ...'"),
    );
    properties.insert("risks".into(), string_list("Delivery, product and business risks"));
    properties.insert(
        "open_questions".into(),
        string_list("Information missing from the notes that must be resolved"),
    );

    json!({
        "type": "object",
        "properties": properties,
        "required": PRD_FIELDS,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_field() {
        let schema = prd_json_schema();
        let required: Vec<&str> =
            schema["required"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
        assert_eq!(required, PRD_FIELDS);

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), PRD_FIELDS.len());
        for field in PRD_FIELDS {
            assert!(properties.contains_key(field), "missing property {field}");
        }
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_list_fields_are_string_arrays() {
        let schema = prd_json_schema();
        assert_eq!(schema["properties"]["problem_statement"]["type"], "string");
        assert_eq!(schema["properties"]["risks"]["type"], "array");
        assert_eq!(schema["properties"]["risks"]["items"]["type"], "string");
    }
}
