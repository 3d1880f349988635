use thiserror::Error;

use crate::manifest::error::ManifestReadError;
use crate::process::ExecutionError;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Failed to get version from tag or commit hash")]
    Unavailable,

    #[error(transparent)]
    ManifestRead(#[from] ManifestReadError),
}
