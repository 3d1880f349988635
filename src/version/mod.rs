//! Version resolution layer
//!
//! Produces the `--version` banner: the tool version comes from the
//! version-control checkout, the library version from the build manifest.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Reporter   │────▶│   Oracle    │────▶│ CommandRunner│
//! │  (banner)   │     │ (tag/hash)  │     │  (process)   │
//! └─────────────┘     └─────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Manifest   │
//! │  (pom.xml)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`oracle`]: Tag / commit-hash fallback chain
//! - [`reporter`]: Combines both versions into a [`reporter::VersionBanner`]
//! - [`error`]: Error type shared by the layer

pub mod error;
pub mod oracle;
pub mod reporter;

pub use error::VersionError;
pub use oracle::GitVersionOracle;
pub use reporter::{VersionBanner, VersionReporter};
