use chrono::{DateTime, Utc};
use contact_schema::{ContactSubmission, User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbContactSubmission> for ContactSubmission {
    fn from(d: DbContactSubmission) -> Self {
        ContactSubmission {
            id: d.id,
            name: d.name,
            email: d.email,
            subject: d.subject,
            message: d.message,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl From<DbUser> for User {
    fn from(d: DbUser) -> Self {
        User {
            id: d.id,
            username: d.username,
            password: d.password,
        }
    }
}
