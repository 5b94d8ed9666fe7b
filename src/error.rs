use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Problems outside the validation pipeline: config, arguments, files.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read configuration file at {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration at {path} could not be parsed: {message}")]
    ParseConfig { path: PathBuf, message: String },
    #[error("Invalid path pattern `{pattern}`: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("No files matched: {patterns}")]
    NothingMatched { patterns: String },
    #[error("Failed to read document {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown output mode `{0}` (expected human|json)")]
    UnknownOutput(String),
}

impl AppError {
    /// Every problem outside the pipeline exits with 2; findings exit with 1.
    pub fn code(&self) -> u8 {
        2
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
