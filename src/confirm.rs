//! Interactive confirmation, injectable so tests can script answers.

use dialoguer::console::{Key, Term};

/// Presents a generated commit message and asks whether to use it.
///
/// Production shows the message and reads one key from the controlling
/// terminal; tests supply scripted answers without a TTY.
pub trait ConfirmationProvider {
    /// Display `message` and ask whether to commit with it.
    fn confirm_commit(&mut self, message: &str) -> std::io::Result<bool>;
}

/// Asks on the controlling terminal with a single-key read.
///
/// The terminal is read directly, so redirected stdin cannot answer the
/// prompt. Exactly `y` or `Y` accepts; any other key, including enter,
/// declines.
pub struct TerminalConfirmation;

impl ConfirmationProvider for TerminalConfirmation {
    fn confirm_commit(&mut self, message: &str) -> std::io::Result<bool> {
        println!("\n{message}\n");

        let term = Term::stderr();
        term.write_str("Commit with this message? [y/N] ")?;
        let key = term.read_key()?;
        let accepted = is_affirmative(&key);
        term.write_line(if accepted { "y" } else { "n" })?;
        Ok(accepted)
    }
}

/// Only `y`/`Y` counts as yes; everything else is a decline.
fn is_affirmative(key: &Key) -> bool {
    matches!(key, Key::Char('y') | Key::Char('Y'))
}
