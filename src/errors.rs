//! Unified application error type.
//! Form logic, config, scripts and export all return AppError so the CLI
//! shell can report every failure the same way.

use crate::models::duration::RangeError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Invalid duration unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidOption { field: String, value: String },

    #[error("Unknown field: {0}")]
    InvalidField(String),

    // ---------------------------
    // Form errors
    // ---------------------------
    #[error("No medication entry at position {0}")]
    UnknownEntry(usize),

    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Validation failed: {0} field(s) need attention")]
    ValidationFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
