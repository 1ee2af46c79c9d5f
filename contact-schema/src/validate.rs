//! Structural validation of untyped JSON input.
//!
//! Validators walk a `serde_json::Value` and collect every problem they find instead of
//! stopping at the first one, so a caller can report all missing fields in one response.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// One failed check, located by the key it applies to. An empty `path` means the root value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// All issues found while validating one input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Paths of every issue, in the order they were reported.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.path.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation error: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if issue.path.is_empty() {
                f.write_str(&issue.message)?;
            } else {
                write!(f, "{} at \"{}\"", issue.message, issue.path)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Name of a JSON value's kind as it appears in "received ..." messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads required fields out of a JSON object, accumulating issues as it goes.
///
/// Keys that are never asked for are ignored.
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    issues: Vec<ValidationIssue>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(input: &'a Value) -> Result<Self, ValidationError> {
        match input {
            Value::Object(fields) => Ok(Self {
                fields,
                issues: Vec::new(),
            }),
            other => Err(ValidationError {
                issues: vec![ValidationIssue {
                    path: String::new(),
                    message: format!("Expected object, received {}", kind_of(other)),
                }],
            }),
        }
    }

    /// Returns the field as an owned string, or records why it could not.
    /// Empty strings are accepted.
    pub(crate) fn required_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.push(key, format!("Expected string, received {}", kind_of(other)));
                None
            }
            None => {
                self.push(key, "Required".to_string());
                None
            }
        }
    }

    fn push(&mut self, key: &str, message: String) {
        self.issues.push(ValidationIssue {
            path: key.to_string(),
            message,
        });
    }

    /// Consumes the reader into the issues it recorded.
    pub(crate) fn into_error(self) -> ValidationError {
        debug_assert!(!self.issues.is_empty());
        ValidationError {
            issues: self.issues,
        }
    }
}
