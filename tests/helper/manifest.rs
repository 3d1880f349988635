//! pom.xml test utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Builds a pom.xml inside a temporary directory, records kept in insertion order
#[derive(Default)]
pub struct ManifestBuilder {
    records: Vec<String>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record in canonical groupId/artifactId/version order
    pub fn dependency(self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        let record = format!(
            "    <dependency>\n      <groupId>{}</groupId>\n      <artifactId>{}</artifactId>\n      <version>{}</version>\n    </dependency>",
            group_id, artifact_id, version
        );
        self.raw_record(&record)
    }

    /// Append hand-written markup to the `<dependencies>` section
    pub fn raw_record(mut self, record: &str) -> Self {
        self.records.push(record.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut records = String::new();
        for record in &self.records {
            records.push_str(record);
            records.push('\n');
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.casbin</groupId>
  <artifactId>casbin-java-cli</artifactId>
  <version>1.0.0</version>
  <dependencies>
{}  </dependencies>
</project>
"#,
            records
        )
    }

    /// Write `pom.xml` into a fresh temp directory
    pub fn write(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pom.xml");
        std::fs::write(&path, self.render()).unwrap();
        (dir, path)
    }
}
