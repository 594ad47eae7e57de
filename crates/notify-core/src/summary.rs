//! Structured summary returned by the model in the structured variant.

use serde::{Deserialize, Serialize};

use crate::schema::{ExcessPolicy, FieldShape, FieldSpec, Schema};

/// The six-field JSON object the structured prompt asks the model for.
///
/// Shape is strict, content is not: every field must be present and no other
/// top-level field is accepted, but the values themselves are not inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryContract {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub thread_id: String,
    pub next_steps: Vec<String>,
    pub summary: String,
}

impl Schema for SummaryContract {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", FieldShape::Text),
        FieldSpec::new("description", FieldShape::Text),
        FieldSpec::new("keywords", FieldShape::TextList),
        FieldSpec::new("threadId", FieldShape::Text),
        FieldSpec::new("nextSteps", FieldShape::TextList),
        FieldSpec::new("summary", FieldShape::Text),
    ];
    const EXCESS: ExcessPolicy = ExcessPolicy::Reject;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindError;
    use crate::schema::bind_value;
    use serde_json::json;

    #[test]
    fn test_binds_camel_case_wire_names() {
        let summary: SummaryContract = bind_value(json!({
            "title": ":warning: EC2 | Instance stopped",
            "description": "Instance i-1 stopped.",
            "keywords": ["ec2", "instance-stopped"],
            "threadId": "i-1",
            "nextSteps": ["Check the instance."],
            "summary": "i-1 stopped"
        }))
        .unwrap();

        assert_eq!(summary.thread_id, "i-1");
        assert_eq!(summary.next_steps, vec!["Check the instance.".to_string()]);
    }

    #[test]
    fn test_snake_case_names_are_not_accepted() {
        let err = bind_value::<SummaryContract>(json!({
            "title": "t",
            "description": "d",
            "keywords": [],
            "thread_id": "x",
            "next_steps": [],
            "summary": "s"
        }))
        .unwrap_err();

        assert_eq!(
            err,
            BindError::Missing(vec!["threadId".to_string(), "nextSteps".to_string()])
        );
    }
}
