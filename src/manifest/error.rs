use std::path::PathBuf;

use thiserror::Error;

/// Error type for reading a build manifest
#[derive(Debug, Error)]
pub enum ManifestReadError {
    /// The manifest could not be opened
    #[error("Failed to open manifest {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed markup
    #[error("Malformed manifest {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// The markup is well-formed so far but the document is not
    #[error("Malformed manifest {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: &'static str },
}
