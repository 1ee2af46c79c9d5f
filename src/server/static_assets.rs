//! Static file serving for the pre-built frontend bundle.
//!
//! Files under the bundle root are served with a one hour cache lifetime and an explicit
//! content type. Every request that does not hit a file gets the bundle's `index.html`
//! so the client-side router can take over.

use axum::{
    Router,
    body::Body,
    http::{
        Method, StatusCode, Uri,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::{
    env,
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tracing::{error, info, warn};

use crate::server::respond::json_response;
use crate::server::router::AppState;

pub const INDEX_FILE: &str = "index.html";
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Outcome of looking for the bundle directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDir {
    /// The first candidate that exists as a directory.
    Found(PathBuf),
    /// No candidate exists. `tried` is in the order checked.
    NotFound { tried: Vec<PathBuf> },
}

/// Where the bundle may live, most specific first: the configured directory, then
/// `public/` next to the executable's parent, then `dist/public` under the working
/// directory.
pub fn candidate_dirs(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = configured {
        candidates.push(dir.to_path_buf());
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("..").join("public"));
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join("dist").join("public"));
    }
    candidates
}

pub fn resolve_asset_dir(candidates: Vec<PathBuf>) -> AssetDir {
    match candidates.iter().find(|p| p.is_dir()) {
        Some(found) => AssetDir::Found(found.clone()),
        None => AssetDir::NotFound { tried: candidates },
    }
}

/// Content type sent for a file, keyed by extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") => HTML_CONTENT_TYPE,
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn percent_decode(input: &str) -> Option<String> {
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Turn a request path into a path relative to the bundle root.
///
/// Returns `None` for anything that must not be served from disk: parent-directory
/// segments, dot files, NUL bytes or undecodable input.
fn sanitize_path(request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode(request_path)?;
    if decoded.contains('\0') || decoded.contains('\\') {
        return None;
    }

    let mut result = PathBuf::new();
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        if segment.starts_with('.') {
            return None;
        }
        match Path::new(segment).components().next() {
            Some(Component::Normal(c)) => result.push(c),
            _ => return None,
        }
    }
    Some(result)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildNotFound {
    error: &'static str,
    path: String,
    dist_path: String,
    request_path: String,
}

/// The bundle server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: Arc<PathBuf>,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Pick the bundle directory from the candidates and log what was found.
    ///
    /// When no candidate exists the first one is used anyway, so requests get the
    /// diagnostic 404 instead of the server refusing to start.
    pub fn resolve(configured: Option<&Path>) -> Self {
        let root = match resolve_asset_dir(candidate_dirs(configured)) {
            AssetDir::Found(dir) => dir,
            AssetDir::NotFound { tried } => {
                warn!(tried = ?tried, "frontend build directory not found");
                tried.into_iter().next().unwrap_or_else(|| PathBuf::from("public"))
            }
        };

        info!(path = %root.display(), exists = root.is_dir(), "static files root");
        if let Ok(entries) = std::fs::read_dir(&root) {
            let names: Vec<String> = entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            info!(contents = %names.join(", "), "static files contents");
        }

        Self::new(root)
    }

    /// Install the bundle server as the router's fallback, both for unknown paths and
    /// for known paths hit with a method they do not accept.
    pub fn attach(self, router: Router<AppState>) -> Router<AppState> {
        let handler = move |method: Method, uri: Uri| {
            let assets = self.clone();
            async move { assets.serve(&method, uri.path()).await }
        };
        router
            .method_not_allowed_fallback(handler.clone())
            .fallback(handler)
    }

    /// Serve a file for GET/HEAD when one matches, otherwise the index document.
    pub async fn serve(&self, method: &Method, request_path: &str) -> Response {
        if matches!(*method, Method::GET | Method::HEAD)
            && let Some(relative) = sanitize_path(request_path)
            && let Some(resp) = self.try_file(&relative).await
        {
            return resp;
        }

        self.serve_index(request_path).await
    }

    async fn try_file(&self, relative: &Path) -> Option<Response> {
        let mut full_path = self.root.join(relative);
        let meta = tokio::fs::metadata(&full_path).await.ok()?;
        if meta.is_dir() {
            full_path.push(INDEX_FILE);
            if !tokio::fs::metadata(&full_path).await.ok()?.is_file() {
                return None;
            }
        } else if !meta.is_file() {
            return None;
        }

        let content = tokio::fs::read(&full_path).await.ok()?;
        Some(file_response(content_type_for(&full_path), content))
    }

    async fn serve_index(&self, request_path: &str) -> Response {
        let index_path = self.root.join(INDEX_FILE);
        match tokio::fs::read(&index_path).await {
            Ok(content) => file_response(HTML_CONTENT_TYPE, content),
            Err(e) => {
                error!(
                    path = %index_path.display(),
                    error = %e,
                    "index.html not found"
                );
                json_response(
                    StatusCode::NOT_FOUND,
                    &BuildNotFound {
                        error: "Frontend build not found",
                        path: index_path.display().to_string(),
                        dist_path: self.root.display().to_string(),
                        request_path: request_path.to_string(),
                    },
                )
            }
        }
    }
}

fn file_response(content_type: &'static str, content: Vec<u8>) -> Response {
    (
        [(CONTENT_TYPE, content_type), (CACHE_CONTROL, CACHE_CONTROL_VALUE)],
        Body::from(content),
    )
        .into_response()
}
