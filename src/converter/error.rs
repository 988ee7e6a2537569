use crate::report::UnknownFamily;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    UnknownFamily(#[from] UnknownFamily),

    #[error("Failed to remove previous results in {path}: {source}")]
    CleanOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create temporary file in {path}: {source}")]
    CreateTempFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize report for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write report file {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
