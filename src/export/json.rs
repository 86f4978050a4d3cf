use crate::core::form::Submission;
use crate::errors::AppResult;
use std::path::Path;

/// Pretty-printed submission: entries plus per-entry field errors.
pub fn write_json(path: &Path, submission: &Submission) -> AppResult<()> {
    let json = serde_json::to_string_pretty(submission)?;
    std::fs::write(path, json)?;
    Ok(())
}
