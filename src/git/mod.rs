//! Git operations using git2-rs.

pub mod diff;
pub mod history;

pub use diff::{DiffSource, WorkingDiff, collect_staged_diff, collect_unstaged_diff, collect_working_diff};
pub use history::{head_branch_name, recent_subjects};

use std::path::Path;

use git2::{Commit, ErrorCode, IndexAddOption, Oid, Repository};

use crate::error::GitError;

/// Open the repository containing `path`.
pub fn open_repository(path: &Path) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(GitError::NotARepository)
}

/// Stage every pending change, like `git add -A`.
pub fn stage_all(repo: &Repository) -> Result<(), GitError> {
    let mut index = repo.index().map_err(GitError::StageFailed)?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .map_err(GitError::StageFailed)?;
    index.write().map_err(GitError::StageFailed)?;
    Ok(())
}

/// Create a commit on HEAD from the current index with the given message.
///
/// The author/committer signature comes from git config. On an unborn branch
/// the commit is created with no parents.
pub fn commit(repo: &Repository, message: &str) -> Result<Oid, GitError> {
    let mut index = repo.index().map_err(GitError::CommitFailed)?;
    let tree_id = index.write_tree().map_err(GitError::CommitFailed)?;
    let tree = repo.find_tree(tree_id).map_err(GitError::CommitFailed)?;

    let sig = repo.signature().map_err(GitError::ConfigError)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit().map_err(GitError::CommitFailed)?),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => None,
        Err(e) => return Err(GitError::CommitFailed(e)),
    };
    let parents: Vec<&Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(GitError::CommitFailed)
}
