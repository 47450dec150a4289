use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while reading a works export.
///
/// Individual records with missing fields are never errors; these variants
/// only cover input that cannot be read as a sequence of work records at all.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document is not syntactically valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Valid JSON, but not an array of work objects
    #[error("input is not a list of work records: {0}")]
    InvalidStructure(#[source] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .json or .json.gz files found under {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl InputError {
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => InputError::InvalidStructure(err),
            _ => InputError::InvalidJson(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
