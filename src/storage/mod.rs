//! The single write path for contact submissions.

mod sqlite;

pub use sqlite::DbStorage;

use async_trait::async_trait;
use contact_schema::{ContactSubmission, NewContactSubmission};

#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// Insert one row and return it as stored, with the database-generated `id` and
    /// `created_at` filled in. Not idempotent: calling twice stores two rows.
    async fn create_contact_submission(
        &self,
        input: NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error>;
}
