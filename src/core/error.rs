use std::path::PathBuf;
use thiserror::Error;

/// Failure to download a single artifact. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP Error: {status} {url}")]
    Http { status: u16, url: String },

    #[error("URL Error: {reason} {url}")]
    Transport { reason: String, url: String },
}

/// Central error type for the launcher.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── Configuration ───────────────────────────────────
    #[error("Maker requires a project file: no *.scala file found in {dir:?}")]
    ProjectFileNotFound { dir: PathBuf },

    #[error("Maker requires a single project file, found {}: {}", .candidates.len(), display_paths(.candidates))]
    AmbiguousProjectFile { candidates: Vec<PathBuf> },

    #[error("Unable to determine the home directory (HOME is not set)")]
    HomeDirNotFound,

    // ── Network ─────────────────────────────────────────
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Java ────────────────────────────────────────────
    #[error("Java execution failed: {0}")]
    JavaExecution(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status used when the launcher stops before the child runs.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
