//! Marker-bounded replacement inside a text document.

use crate::error::ReadmeError;

/// Replace everything between `start_marker` and `end_marker` with `body`
/// wrapped in a fenced code block.
///
/// Lines outside the region, and the marker lines themselves, are copied
/// through untouched. The first exact start-marker match opens the region;
/// the next exact end-marker match after it closes it. An empty body still
/// produces the fenced block.
///
/// Errors, checked in order:
/// 1. [`ReadmeError::MissingMarker`] when either marker line is absent from
///    the document entirely.
/// 2. [`ReadmeError::UnterminatedRegion`] when both markers exist but no end
///    marker follows the start marker.
pub fn splice_between_markers(
    document: &str,
    start_marker: &str,
    end_marker: &str,
    body: &str,
) -> Result<String, ReadmeError> {
    if !document.lines().any(|line| line == start_marker) {
        return Err(ReadmeError::MissingMarker(start_marker.to_string()));
    }
    if !document.lines().any(|line| line == end_marker) {
        return Err(ReadmeError::MissingMarker(end_marker.to_string()));
    }

    let mut out = String::with_capacity(document.len() + body.len() + 8);
    let mut lines = document.lines();

    // Copy through the start marker
    for line in lines.by_ref() {
        out.push_str(line);
        out.push('\n');
        if line == start_marker {
            break;
        }
    }

    out.push_str("```\n");
    if !body.is_empty() {
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }
    out.push_str("```\n");

    // Drop the old region up to the end marker
    let mut terminated = false;
    for line in lines.by_ref() {
        if line == end_marker {
            out.push_str(line);
            out.push('\n');
            terminated = true;
            break;
        }
    }
    if !terminated {
        return Err(ReadmeError::UnterminatedRegion(start_marker.to_string()));
    }

    // Copy the remainder
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }

    Ok(out)
}
