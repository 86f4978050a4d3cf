// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

use crate::core::form::Submission;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes the submission payload. Existing files are kept unless `force`.
pub fn export_submission(
    submission: &Submission,
    path: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Json => json::write_json(path, submission)?,
        ExportFormat::Csv => csv::write_csv(path, submission)?,
    }

    tracing::info!(path = %path.display(), format = format.as_str(), "submission exported");
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
