mod common;

use common::TestDb;
use contact_site::contact_schema::{NewContactSubmission, User};
use contact_site::db::DbUser;
use contact_site::storage::{ContactStorage, DbStorage};

#[tokio::test]
async fn schema_init_is_idempotent() {
    let db = TestDb::new("db-schema-idempotent").await;
    let database_url = format!("sqlite:{}", db.path.display());

    // A second pool over the same file re-applies the DDL without error.
    let again = contact_site::db::connect(&database_url)
        .await
        .expect("reopening the database failed");
    again.close().await;

    db.cleanup().await;
}

#[tokio::test]
async fn storage_fills_in_generated_columns() {
    let db = TestDb::new("db-storage").await;
    let storage = DbStorage::new(db.pool.clone());

    let input = NewContactSubmission {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Compilers".to_string(),
        message: "Hello".to_string(),
    };
    let first = storage
        .create_contact_submission(input.clone())
        .await
        .expect("insert failed");
    let second = storage
        .create_contact_submission(input)
        .await
        .expect("insert failed");

    assert_eq!(first.name, "Grace");
    assert_eq!(first.subject, "Compilers");
    assert_eq!(first.id.len(), 36);
    assert_ne!(first.id, second.id);
    assert!(second.created_at >= first.created_at);
    assert_eq!(db.submission_count().await, 2);

    db.cleanup().await;
}

#[tokio::test]
async fn users_table_generates_ids_and_enforces_unique_usernames() {
    let db = TestDb::new("db-users").await;

    let row: DbUser = sqlx::query_as(
        "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
    )
    .bind("ada")
    .bind("pw")
    .fetch_one(&db.pool)
    .await
    .expect("insert user failed");

    let user: User = row.into();
    assert_eq!(user.username, "ada");
    assert_eq!(user.password, "pw");
    assert_eq!(user.id.len(), 36);

    let duplicate = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind("ada")
        .bind("other")
        .execute(&db.pool)
        .await;
    assert!(duplicate.is_err(), "duplicate username must be rejected");

    db.cleanup().await;
}
