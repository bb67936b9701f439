//! Branch and history context for the commit prompt.

use git2::{ErrorCode, Repository};

use crate::error::GitError;

/// Name of the currently checked-out branch.
///
/// An unborn branch resolves through the symbolic HEAD target; a detached
/// HEAD reports as `"HEAD"`.
pub fn head_branch_name(repo: &Repository) -> Result<String, GitError> {
    match repo.head() {
        Ok(head) => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            let head = repo.find_reference("HEAD").map_err(GitError::BranchFailed)?;
            let name = head
                .symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .unwrap_or("HEAD");
            Ok(name.to_string())
        }
        Err(e) => Err(GitError::BranchFailed(e)),
    }
}

/// Subject lines of the most recent `limit` commits on HEAD, newest first.
///
/// An unborn branch yields an empty list rather than an error.
pub fn recent_subjects(repo: &Repository, limit: usize) -> Result<Vec<String>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    match revwalk.push_head() {
        Ok(()) => {}
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(GitError::RevwalkError(e)),
    }

    let mut subjects = Vec::new();
    for oid_result in revwalk.take(limit) {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::RevwalkError)?;
        subjects.push(commit.summary().unwrap_or("").to_string());
    }

    Ok(subjects)
}
