//! The commit flow: diff, prompt, model call, confirmation, commit.
//!
//! Every step completes before the next starts. Nothing is retried; any
//! failure surfaces immediately and leaves the repository as it was.

pub mod normalize;
pub mod prompt;

pub use normalize::normalize_message;
pub use prompt::build_commit_prompt;

use git2::{Oid, Repository};
use thiserror::Error;
use tracing::debug;

use crate::confirm::ConfirmationProvider;
use crate::error::{GitError, InferenceError};
use crate::git::{self, DiffSource};
use crate::ollama::InferenceClient;

/// How many recent subject lines go into the prompt.
const HISTORY_DEPTH: usize = 5;

/// Terminal states of the commit flow.
#[derive(Debug)]
pub enum CommitOutcome {
    /// A commit was created with the approved message.
    Committed { oid: Oid, message: String },
    /// The operator declined the generated message. Nothing was staged or
    /// committed.
    Aborted,
    /// Working tree and index are clean; treated as success.
    NoChanges,
}

/// Everything that can stop the commit flow.
#[derive(Error, Debug)]
pub enum CommitFlowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Failed to read confirmation: {0}")]
    Confirm(#[source] std::io::Error),
}

/// Run the whole flow against an open repository.
///
/// Unstaged changes are preferred as the diff source. When the diff came
/// from the index instead, staging is skipped and the index is committed
/// as-is, so a carefully staged subset is never widened behind the
/// operator's back.
pub async fn run_commit(
    repo: &Repository,
    inference: &dyn InferenceClient,
    confirm: &mut dyn ConfirmationProvider,
) -> Result<CommitOutcome, CommitFlowError> {
    let Some(diff) = git::collect_working_diff(repo)? else {
        return Ok(CommitOutcome::NoChanges);
    };
    debug!(
        "collected {:?} diff: {} files, +{} -{}, truncated={}",
        diff.source,
        diff.changed_files.len(),
        diff.additions,
        diff.deletions,
        diff.truncated
    );

    let branch = git::head_branch_name(repo)?;
    let history = git::recent_subjects(repo, HISTORY_DEPTH)?;
    let prompt = build_commit_prompt(&branch, &history, &diff.text);
    debug!("commit prompt: {} chars", prompt.len());

    let raw = inference.generate(&prompt).await?;
    let message = normalize_message(&raw);

    let accepted = confirm
        .confirm_commit(&message)
        .map_err(CommitFlowError::Confirm)?;
    if !accepted {
        return Ok(CommitOutcome::Aborted);
    }

    if diff.source == DiffSource::Unstaged {
        git::stage_all(repo)?;
    }
    let oid = git::commit(repo, &message)?;

    Ok(CommitOutcome::Committed { oid, message })
}
