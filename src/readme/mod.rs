//! README project-tree maintenance.
//!
//! Concurrent invocations against the same README are unsupported: the
//! update takes no lock, it only guarantees that a single invocation either
//! fully replaces the document or leaves it untouched.

pub mod markers;
pub mod tree;

pub use markers::splice_between_markers;
pub use tree::render_tree;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::TreeConfig;
use crate::error::ReadmeError;

/// Regenerate the project tree and splice it into the README.
///
/// The document is rewritten through a temporary file in the same directory
/// and renamed over the original, so a failure at any point leaves the
/// README exactly as it was.
pub fn update_readme(config: &TreeConfig) -> Result<(), ReadmeError> {
    let document =
        fs::read_to_string(&config.readme_path).map_err(|source| ReadmeError::ReadFailed {
            path: config.readme_path.display().to_string(),
            source,
        })?;

    let listing = render_tree(&config.root, &config.exclude)?;
    debug!("rendered tree: {} lines", listing.lines().count());

    let updated = splice_between_markers(
        &document,
        &config.start_marker,
        &config.end_marker,
        &listing,
    )?;

    write_atomic(&config.readme_path, &updated)
}

/// Write `contents` to `path` via a sibling temp file and rename.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ReadmeError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(ReadmeError::WriteFailed)?;
    tmp.write_all(contents.as_bytes())
        .map_err(ReadmeError::WriteFailed)?;
    tmp.persist(path)
        .map_err(|e| ReadmeError::WriteFailed(e.error))?;
    Ok(())
}
