//! Event-driven dependency scanner
//!
//! Extracts the version of one `(groupId, artifactId)` dependency record from a
//! stream of [`ScanEvent`]s without building a document tree.
//!
//! States:
//! - Outside: not inside a `dependency` element
//! - InRecord: inside a `dependency` element; `groupId`, `artifactId` and
//!   `version` are treated as flat fields of the record
//!
//! Text inside a field is buffered until the field's end tag, so values split
//! by comments or CDATA sections are read whole. The key fields are only
//! compared when `version` ends, so a record whose version precedes its key
//! fields never matches.

use tracing::debug;

use crate::manifest::types::{ScanEvent, VersionQuery};

const DEPENDENCY: &str = "dependency";
const GROUP_ID: &str = "groupId";
const ARTIFACT_ID: &str = "artifactId";
const VERSION: &str = "version";

/// Scanner state for a single lookup
#[derive(Debug)]
pub struct DependencyScanner {
    query: VersionQuery,
    current_element: String,
    field_text: String,
    current_group_id: Option<String>,
    current_artifact_id: Option<String>,
    inside_record: bool,
    resolved_version: Option<String>,
}

impl DependencyScanner {
    pub fn new(query: VersionQuery) -> Self {
        Self {
            query,
            current_element: String::new(),
            field_text: String::new(),
            current_group_id: None,
            current_artifact_id: None,
            inside_record: false,
            resolved_version: None,
        }
    }

    /// Feed one event into the state machine
    pub fn handle(&mut self, event: ScanEvent<'_>) {
        match event {
            ScanEvent::Start(name) => self.on_start(name),
            ScanEvent::End(name) => self.on_end(name),
            ScanEvent::Text(content) => self.on_text(content),
        }
    }

    /// True once the target version has been found; further events are ignored
    pub fn is_done(&self) -> bool {
        self.resolved_version.is_some()
    }

    /// Consume the scanner and return the resolved version, if any
    pub fn finish(self) -> Option<String> {
        self.resolved_version
    }

    fn on_start(&mut self, name: &str) {
        if name == DEPENDENCY {
            self.inside_record = true;
            self.current_group_id = None;
            self.current_artifact_id = None;
        }
        self.current_element.clear();
        self.current_element.push_str(name);
        self.field_text.clear();
    }

    fn on_end(&mut self, name: &str) {
        if self.inside_record && name == self.current_element {
            self.commit_field();
        }
        if name == DEPENDENCY {
            self.inside_record = false;
            self.current_group_id = None;
            self.current_artifact_id = None;
        }
        // Text after a closing tag belongs to no field
        self.current_element.clear();
        self.field_text.clear();
    }

    fn on_text(&mut self, content: &str) {
        if self.inside_record && !self.current_element.is_empty() && !self.is_done() {
            self.field_text.push_str(content);
        }
    }

    fn commit_field(&mut self) {
        if self.is_done() {
            return;
        }

        let content = self.field_text.trim();
        if content.is_empty() {
            return;
        }

        match self.current_element.as_str() {
            GROUP_ID => self.current_group_id = Some(content.to_string()),
            ARTIFACT_ID => self.current_artifact_id = Some(content.to_string()),
            VERSION => {
                if self.query.matches(
                    self.current_group_id.as_deref(),
                    self.current_artifact_id.as_deref(),
                ) {
                    debug!("Found {} version {}", self.query, content);
                    self.resolved_version = Some(content.to_string());
                }
            }
            _ => {}
        }
    }
}

/// Run a scan over any event source, stopping at the first match
pub fn scan<'a, I>(query: VersionQuery, events: I) -> Option<String>
where
    I: IntoIterator<Item = ScanEvent<'a>>,
{
    let mut scanner = DependencyScanner::new(query);
    for event in events {
        scanner.handle(event);
        if scanner.is_done() {
            break;
        }
    }
    scanner.finish()
}
