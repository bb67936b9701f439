//! gitscribe - commit messages from your diff via a local Ollama model,
//! plus marker-bounded README tree upkeep.
//!
//! # Overview
//!
//! gitscribe has two commands. `commit` collects the pending git diff,
//! asks a locally hosted Ollama server for a one-line commit message, and
//! creates the commit once the operator approves it. `tree` regenerates the
//! project file tree and splices it between two fixed marker lines in the
//! README, leaving the rest of the file untouched.

pub mod commit;
pub mod config;
pub mod confirm;
pub mod error;
pub mod git;
pub mod ollama;
pub mod readme;

// Re-export commonly used types
pub use commit::{CommitFlowError, CommitOutcome, run_commit};
pub use config::{InferenceConfig, TreeConfig};
pub use confirm::{ConfirmationProvider, TerminalConfirmation};
pub use error::{GitError, InferenceError, ReadmeError};
pub use git::{DiffSource, WorkingDiff};
pub use ollama::{InferenceClient, OllamaClient};
pub use readme::update_readme;
