//! Static file serving module
//!
//! Resolves request paths against the site root, loads files, and builds
//! the 200/404/500 responses.

use crate::config::{AppState, PathPolicy};
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Why a resolved path could not be served
#[derive(Debug, Error)]
pub enum ServeError {
    /// Nothing servable at the resolved path (missing, directory, or outside
    /// the root under [`PathPolicy::Confine`])
    #[error("File not found: {0}")]
    NotFound(String),
    /// The file exists but could not be read
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Serve the asset named by the request path
pub async fn serve_asset(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let relative = resolve_request_path(ctx.path, &state.config.site.default_document);

    let loaded = match locate(&state.root, &relative, state.config.site.path_policy).await {
        Ok(file_path) => load_file(&file_path, &relative).await,
        Err(e) => Err(e),
    };

    match loaded {
        Ok(content) => {
            let content_type = mime::content_type_for(Path::new(&relative));
            http::build_file_response(Bytes::from(content), content_type, ctx.is_head)
        }
        Err(ServeError::NotFound(path)) => http::build_404_response(&path, ctx.is_head),
        Err(e @ ServeError::Read { .. }) => {
            logger::log_error(&e.to_string());
            http::build_500_response(ctx.is_head)
        }
    }
}

/// Map a decoded URL path to a root-relative path
///
/// Leading slashes are stripped; an empty result becomes `default_document`.
pub fn resolve_request_path(path: &str, default_document: &str) -> String {
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        default_document.to_string()
    } else {
        relative.to_string()
    }
}

/// Find the regular file `relative` names under `root`
pub async fn locate(root: &Path, relative: &str, policy: PathPolicy) -> Result<PathBuf, ServeError> {
    let not_found = || ServeError::NotFound(relative.to_string());
    let mut file_path = root.join(relative);

    if policy == PathPolicy::Confine {
        let root_canonical = match fs::canonicalize(root).await {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Site root not found or inaccessible '{}': {e}",
                    root.display()
                ));
                return Err(not_found());
            }
        };

        // File not found is common (404), no need to log at warning level
        let Ok(file_canonical) = fs::canonicalize(&file_path).await else {
            return Err(not_found());
        };
        if !file_canonical.starts_with(&root_canonical) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {relative} -> {}",
                file_canonical.display()
            ));
            return Err(not_found());
        }
        file_path = file_canonical;
    }

    match fs::metadata(&file_path).await {
        Ok(meta) if meta.is_file() => Ok(file_path),
        _ => Err(not_found()),
    }
}

/// Read a located file; `relative` names it in errors
pub async fn load_file(file_path: &Path, relative: &str) -> Result<Vec<u8>, ServeError> {
    fs::read(file_path).await.map_err(|source| ServeError::Read {
        path: relative.to_string(),
        source,
    })
}
