//! pom.xml dependency version lookup
//!
//! Streams the document with quick-xml and drives a [`DependencyScanner`]
//! with the resulting events. Only the scanner state is kept in memory.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info};

use crate::config::DEFAULT_MANIFEST_FILE;
use crate::manifest::error::ManifestReadError;
use crate::manifest::scanner::DependencyScanner;
use crate::manifest::types::{ScanEvent, VersionQuery};

/// Returns `<current working directory>/pom.xml`
pub fn default_manifest_path() -> Result<PathBuf, ManifestReadError> {
    working_dir_manifest(DEFAULT_MANIFEST_FILE)
}

/// Resolve a manifest file name against the current working directory
pub fn working_dir_manifest(file_name: &str) -> Result<PathBuf, ManifestReadError> {
    std::env::current_dir()
        .map(|dir| dir.join(file_name))
        .map_err(|source| ManifestReadError::Open {
            path: PathBuf::from(file_name),
            source,
        })
}

/// Find the declared version of the dependency identified by `query`
///
/// # Returns
/// * `Ok(Some(version))` - The first matching dependency record's version
/// * `Ok(None)` - No dependency record matches the query
/// * `Err(ManifestReadError)` - The file cannot be opened or is malformed
pub fn find_dependency_version(
    path: &Path,
    query: &VersionQuery,
) -> Result<Option<String>, ManifestReadError> {
    let file = File::open(path).map_err(|source| ManifestReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Scanning {} for {}", path.display(), query);

    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut scanner = DependencyScanner::new(query.clone());
    let mut shape = DocumentShape::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                shape.open().map_err(|reason| invalid(path, reason))?;
                let name = e.name();
                scanner.handle(ScanEvent::Start(&String::from_utf8_lossy(name.as_ref())));
            }
            Ok(Event::Empty(e)) => {
                shape.open().map_err(|reason| invalid(path, reason))?;
                shape.close();
                let name = e.name();
                let name = String::from_utf8_lossy(name.as_ref());
                scanner.handle(ScanEvent::Start(&name));
                scanner.handle(ScanEvent::End(&name));
            }
            Ok(Event::End(e)) => {
                shape.close();
                let name = e.name();
                scanner.handle(ScanEvent::End(&String::from_utf8_lossy(name.as_ref())));
            }
            Ok(Event::Text(e)) => {
                shape
                    .text(e.iter().all(u8::is_ascii_whitespace))
                    .map_err(|reason| invalid(path, reason))?;
                let text = e.unescape().map_err(|source| malformed(path, source))?;
                scanner.handle(ScanEvent::Text(&text));
            }
            Ok(Event::CData(e)) => {
                shape.text(false).map_err(|reason| invalid(path, reason))?;
                scanner.handle(ScanEvent::Text(&String::from_utf8_lossy(&e)));
            }
            Ok(Event::Eof) => {
                shape.finish().map_err(|reason| invalid(path, reason))?;
                break;
            }
            Ok(_) => {}
            Err(source) => return Err(malformed(path, source)),
        }

        if scanner.is_done() {
            break;
        }
        buf.clear();
    }

    let version = scanner.finish();
    match &version {
        Some(version) => info!("Resolved {} version {}", query, version),
        None => info!("{} is not declared in {}", query, path.display()),
    }

    Ok(version)
}

/// Document-level checks the pull parser leaves to its caller
#[derive(Debug, Default)]
struct DocumentShape {
    depth: usize,
    root_seen: bool,
}

impl DocumentShape {
    fn open(&mut self) -> Result<(), &'static str> {
        if self.depth == 0 && self.root_seen {
            return Err("more than one root element");
        }
        self.depth += 1;
        self.root_seen = true;
        Ok(())
    }

    fn close(&mut self) {
        // Unbalanced end tags are rejected by the reader itself
        self.depth = self.depth.saturating_sub(1);
    }

    fn text(&self, whitespace_only: bool) -> Result<(), &'static str> {
        if self.depth == 0 && !whitespace_only {
            return Err("content outside the root element");
        }
        Ok(())
    }

    fn finish(&self) -> Result<(), &'static str> {
        if !self.root_seen {
            return Err("no root element");
        }
        if self.depth != 0 {
            return Err("premature end of document, unclosed element");
        }
        Ok(())
    }
}

fn invalid(path: &Path, reason: &'static str) -> ManifestReadError {
    ManifestReadError::Invalid {
        path: path.to_path_buf(),
        reason,
    }
}

fn malformed(path: &Path, source: impl Into<quick_xml::Error>) -> ManifestReadError {
    ManifestReadError::Malformed {
        path: path.to_path_buf(),
        source: source.into(),
    }
}
