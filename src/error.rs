//! Error kinds for the scan → classify → generate pipeline.
//!
//! Everything here is detected before or at the single file write, so an
//! invocation either fully succeeds or aborts without touching the project.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The project path does not exist or is not a readable directory.
    #[error("project path not found or not a directory: {path}")]
    ProjectNotFound { path: PathBuf },

    /// The requested CI platform is not one of the supported targets.
    #[error("unsupported CI platform: {name} (expected one of: {expected})")]
    UnsupportedPlatform { name: String, expected: String },

    /// The pipeline file could not be written.
    #[error("failed to write pipeline to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
