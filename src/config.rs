//! Runtime configuration for the commit and tree commands.
//!
//! Both commands take an explicit config struct rather than reading ambient
//! state, so tests can substitute endpoints, markers, and paths freely.

use std::path::PathBuf;
use std::time::Duration;

/// Default Ollama generate endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Default model name passed to the server.
pub const DEFAULT_MODEL: &str = "qwen2.5-coder:7b";

/// Marker line that opens the replaceable region in the README.
pub const DEFAULT_START_MARKER: &str = "# Project Structure";

/// Marker line that closes the replaceable region.
pub const DEFAULT_END_MARKER: &str = "### Stop Project Structure";

/// Directory names never shown in the README tree.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "target", "node_modules", "dist", ".venv"];

/// Settings for the Ollama inference call.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub num_predict: u32,
    /// Upper bound on the whole HTTP exchange. The transport default is no
    /// timeout at all; an unresponsive server would otherwise block forever.
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            num_predict: 200,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Settings for the README tree update.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Document carrying the marker lines.
    pub readme_path: PathBuf,
    /// Directory whose tree is rendered.
    pub root: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
    /// Directory names excluded from the listing.
    pub exclude: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from("README.md"),
            root: PathBuf::from("."),
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
