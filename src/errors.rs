//! Error types for the CLI surface.
//!
//! The scoring core itself is total and never fails; everything here covers
//! getting data in and out of it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtectronError {
    #[error("failed to read {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin")]
    StdinRead(#[source] std::io::Error),

    #[error("invalid input JSON: {0}")]
    InputParse(#[from] serde_json::Error),
}
