#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use contact_site::db::SqlitePool;
use contact_site::server::{AppState, build_router};
use contact_site::storage::DbStorage;
use serde_json::Value;
use std::{
    io,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::subscriber::DefaultGuard;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A fresh path under the system temp dir, unique per process and call.
pub fn temp_path(prefix: &str, suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "{prefix}-{}-{nanos}-{seq}{suffix}",
        std::process::id()
    ));
    path
}

pub struct TestDb {
    pub pool: SqlitePool,
    pub path: PathBuf,
}

impl TestDb {
    pub async fn new(prefix: &str) -> Self {
        let path = temp_path(prefix, ".sqlite");
        let database_url = format!("sqlite:{}", path.display());
        let pool = contact_site::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        Self { pool, path }
    }

    pub fn app(&self) -> Router {
        let state = AppState::new(Arc::new(DbStorage::new(self.pool.clone())));
        build_router(state, std::convert::identity)
    }

    pub async fn submission_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed")
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

/// Log output collected by [`capture_logs`].
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains(needle))
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `info` and above on this thread into a buffer until the guard drops.
///
/// Tests using this must run on the current-thread runtime (`#[tokio::test]`'s default).
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
