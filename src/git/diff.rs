//! Diff collection from the working tree using git2.

use git2::{Diff, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use tracing::warn;

use crate::error::GitError;

/// Maximum characters for the unified diff text before truncation.
const MAX_DIFF_LENGTH: usize = 30_000;

/// Which side of the index a diff was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSource {
    /// Index vs working tree, untracked files included.
    Unstaged,
    /// HEAD tree vs index.
    Staged,
}

/// A non-empty diff ready for prompt assembly.
#[derive(Debug, Clone)]
pub struct WorkingDiff {
    pub text: String,
    pub source: DiffSource,
    /// Paths touched by this diff, sorted and deduplicated.
    pub changed_files: Vec<String>,
    pub truncated: bool,
    pub additions: usize,
    pub deletions: usize,
}

impl WorkingDiff {
    fn from_diff(diff: &Diff<'_>, source: DiffSource) -> Option<Self> {
        if diff.deltas().len() == 0 {
            return None;
        }

        let mut changed_files: Vec<String> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().to_string())
            })
            .collect();
        changed_files.sort();
        changed_files.dedup();

        let mut text = String::new();
        let mut additions = 0usize;
        let mut deletions = 0usize;
        let mut truncated = false;
        append_diff_text(diff, &mut text, &mut additions, &mut deletions, &mut truncated);

        Some(Self {
            text,
            source,
            changed_files,
            truncated,
            additions,
            deletions,
        })
    }
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD, or `Err(GitError::DiffFailed)`
/// for real errors (corrupt HEAD, permission issues, missing objects).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(GitError::DiffFailed(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::DiffFailed)?;
    Ok(Some(tree))
}

/// Collect the unstaged diff (index vs working tree, untracked included).
///
/// Returns `None` when there are no unstaged changes.
pub fn collect_unstaged_diff(repo: &Repository) -> Result<Option<WorkingDiff>, GitError> {
    let mut opts = DiffOptions::new();
    opts.include_untracked(true).recurse_untracked_dirs(true);
    let diff = repo
        .diff_index_to_workdir(None, Some(&mut opts))
        .map_err(GitError::DiffFailed)?;

    Ok(WorkingDiff::from_diff(&diff, DiffSource::Unstaged))
}

/// Collect the staged diff (HEAD tree vs index).
///
/// Returns `None` when the index matches HEAD.
pub fn collect_staged_diff(repo: &Repository) -> Result<Option<WorkingDiff>, GitError> {
    let head_tree = resolve_head_tree(repo)?;
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(GitError::DiffFailed)?;

    Ok(WorkingDiff::from_diff(&diff, DiffSource::Staged))
}

/// Collect the diff for the commit flow, preferring unstaged changes.
///
/// Unstaged (plus untracked) changes win when both kinds exist; staged
/// changes are only the fallback. Returns `None` when the working tree and
/// index are both clean.
pub fn collect_working_diff(repo: &Repository) -> Result<Option<WorkingDiff>, GitError> {
    if let Some(diff) = collect_unstaged_diff(repo)? {
        return Ok(Some(diff));
    }
    collect_staged_diff(repo)
}

/// Append unified diff text from a diff object, respecting the max length.
fn append_diff_text(
    diff: &Diff<'_>,
    text: &mut String,
    additions: &mut usize,
    deletions: &mut usize,
    truncated: &mut bool,
) {
    if let Err(e) = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if *truncated {
            return true;
        }

        match line.origin() {
            '+' => *additions += 1,
            '-' => *deletions += 1,
            _ => {}
        }

        let content = std::str::from_utf8(line.content()).unwrap_or("");

        // Check if adding this line would exceed the limit
        if text.len() + content.len() + 2 > MAX_DIFF_LENGTH {
            *truncated = true;
            return true;
        }

        // Include the origin character for context
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(content);

        true
    }) {
        warn!("Failed to collect diff text: {e}");
        *truncated = true;
    }
}
