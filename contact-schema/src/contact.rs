use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{ObjectReader, ValidationError};

/// A stored contact-form entry. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Insert shape of [`ContactSubmission`]: every column except the server-generated
/// `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Check an untyped request body against the contact submission insert shape.
///
/// All four fields must be present strings. Nothing else is checked: no email format,
/// no length limits, empty strings pass. Unknown keys are dropped.
pub fn validate_contact_submission(input: &Value) -> Result<NewContactSubmission, ValidationError> {
    let mut reader = ObjectReader::new(input)?;
    let name = reader.required_string("name");
    let email = reader.required_string("email");
    let subject = reader.required_string("subject");
    let message = reader.required_string("message");

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) => Ok(NewContactSubmission {
            name,
            email,
            subject,
            message,
        }),
        _ => Err(reader.into_error()),
    }
}
