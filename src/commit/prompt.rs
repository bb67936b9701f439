//! Prompt construction for the commit message request.

/// Build the prompt sent to the model.
///
/// Fixed template: branch name, recent subject lines for style context, then
/// the raw diff in a fenced block. No size cap is applied here; truncation
/// is the diff collector's job.
pub fn build_commit_prompt(branch: &str, recent_subjects: &[String], diff_text: &str) -> String {
    let history = if recent_subjects.is_empty() {
        "(no previous commits)".to_string()
    } else {
        recent_subjects
            .iter()
            .map(|subject| format!("- {subject}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are writing a Git commit message for the change below.

## Branch
{branch}

## Recent commit subjects
{history}

## Diff
```
{diff_text}
```

Rules:
- One line, imperative mood, Conventional Commits style (`type(scope): description`).
- No surrounding quotes, no trailing period, at most 72 characters.

Respond with the commit message only."#
    )
}
