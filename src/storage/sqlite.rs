use async_trait::async_trait;
use contact_schema::{ContactSubmission, NewContactSubmission};
use sqlx::SqlitePool;

use super::ContactStorage;
use crate::db::models::DbContactSubmission;

#[derive(Clone)]
pub struct DbStorage {
    pool: SqlitePool,
}

impl DbStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStorage for DbStorage {
    async fn create_contact_submission(
        &self,
        input: NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let row: DbContactSubmission = sqlx::query_as(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.subject)
        .bind(input.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
