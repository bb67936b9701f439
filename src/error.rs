//! Error types for gitscribe modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository (or any parent directory): {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Failed to read branch name: {0}")]
    BranchFailed(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to stage changes: {0}")]
    StageFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Errors from the Ollama inference endpoint.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Could not reach Ollama at {endpoint}: {source}. Is the server running?")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Ollama returned HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Ollama response did not contain a usable `response` field")]
    EmptyResponse,

    #[error("Failed to decode Ollama response: {0}")]
    DecodeFailed(#[source] reqwest::Error),
}

/// Errors from README tree updates.
#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Marker line not found in document: {0:?}")]
    MissingMarker(String),

    #[error("Start marker {0:?} has no matching end marker after it")]
    UnterminatedRegion(String),

    #[error("Failed to write updated document: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to scan directory tree: {0}")]
    ScanFailed(#[source] ignore::Error),
}
