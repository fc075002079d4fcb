//! Structured schema validation issues.
//!
//! Issues are serialised as-is into the `errors` array of a 400 response, so
//! the field names here are part of the HTTP contract.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooBig,
    TooSmall,
}

/// A single schema violation, located by `path` inside the request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'static str>,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    /// Field absent from the body.
    pub fn required(field: &str, expected: &'static str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: Some(expected),
            received: Some("undefined"),
            path: path_of(field),
            message: "Required".into(),
        }
    }

    /// Field present with the wrong JSON type.
    pub fn invalid_type(field: &str, expected: &'static str, received: &'static str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            expected: Some(expected),
            received: Some(received),
            path: path_of(field),
            message: format!("Expected {expected}, received {received}"),
        }
    }

    pub fn too_big(field: &str, max: i64) -> Self {
        Self {
            code: IssueCode::TooBig,
            expected: None,
            received: None,
            path: path_of(field),
            message: format!("Number must be less than or equal to {max}"),
        }
    }

    pub fn too_small(field: &str, min: i64) -> Self {
        Self {
            code: IssueCode::TooSmall,
            expected: None,
            received: None,
            path: path_of(field),
            message: format!("Number must be greater than or equal to {min}"),
        }
    }
}

fn path_of(field: &str) -> Vec<String> {
    if field.is_empty() {
        Vec::new()
    } else {
        vec![field.to_string()]
    }
}

/// Name of a JSON value's type as reported in `received`.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Issues collected from one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }
}

impl From<ValidationIssue> for ValidationErrors {
    fn from(issue: ValidationIssue) -> Self {
        Self(vec![issue])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path.join("."), issue.message)?;
            }
        }
        Ok(())
    }
}
