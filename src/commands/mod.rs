//! CLI command implementations.
//!
//! Each submodule handles one subcommand: reading input, calling the pure
//! scoring core, and writing the result through an output writer.

pub mod classify;
pub mod grade;
pub mod init;
pub mod verify;

pub use classify::{run_classify, ClassifyConfig};
pub use grade::{run_grade, GradeConfig};
pub use init::init_config;
pub use verify::run_verify;

use crate::errors::ProtectronError;
use std::io::Read;
use std::path::PathBuf;

/// Read a JSON document from a file, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&PathBuf>) -> Result<String, ProtectronError> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| ProtectronError::InputRead {
                path: path.clone(),
                source,
            })
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(ProtectronError::StdinRead)?;
            Ok(buffer)
        }
    }
}
