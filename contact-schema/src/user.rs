use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{ObjectReader, ValidationError};

/// Row of the `users` table. The password is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

pub fn validate_new_user(input: &Value) -> Result<NewUser, ValidationError> {
    let mut reader = ObjectReader::new(input)?;
    let username = reader.required_string("username");
    let password = reader.required_string("password");

    match (username, password) {
        (Some(username), Some(password)) => Ok(NewUser { username, password }),
        _ => Err(reader.into_error()),
    }
}
