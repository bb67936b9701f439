//! Cleanup of raw model output before it becomes a commit message.

/// Normalize model output into a commit message.
///
/// Strips stray carriage returns, trims surrounding whitespace, and removes
/// a single layer of wrapping quotes. Models often return the message quoted
/// even when told not to.
pub fn normalize_message(raw: &str) -> String {
    let cleaned = raw.replace('\r', "");
    strip_wrapping_quotes(cleaned.trim()).trim().to_string()
}

/// Remove one matching pair of wrapping quote characters, if present.
fn strip_wrapping_quotes(text: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
