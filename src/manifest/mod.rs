//! Build manifest layer
//! - types.rs: VersionQuery and the ScanEvent vocabulary
//! - scanner.rs: event-driven dependency scanner (state machine)
//! - pom.rs: streaming XML event source for pom.xml documents
//! - error.rs: ManifestReadError

pub mod error;
pub mod pom;
pub mod scanner;
pub mod types;

pub use error::ManifestReadError;
pub use pom::{default_manifest_path, find_dependency_version, working_dir_manifest};
pub use scanner::{DependencyScanner, scan};
pub use types::{ScanEvent, VersionQuery};
