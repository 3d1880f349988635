//! Common types for manifest scanning

use std::fmt;

/// Identifies a dependency record by its `(groupId, artifactId)` key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionQuery {
    pub group_id: String,
    pub artifact_id: String,
}

impl VersionQuery {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Check whether the captured key fields equal this query
    pub fn matches(&self, group_id: Option<&str>, artifact_id: Option<&str>) -> bool {
        group_id == Some(self.group_id.as_str()) && artifact_id == Some(self.artifact_id.as_str())
    }
}

impl fmt::Display for VersionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A single event from a streaming structured-document parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// Element start, carrying the qualified element name
    Start(&'a str),
    /// Element end, carrying the qualified element name
    End(&'a str),
    /// Character content between tags
    Text(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("org.casbin"), Some("jcasbin"), true)]
    #[case(Some("org.casbin"), Some("jcasbin-core"), false)]
    #[case(Some("org.other"), Some("jcasbin"), false)]
    #[case(None, Some("jcasbin"), false)]
    #[case(Some("org.casbin"), None, false)]
    #[case(None, None, false)]
    fn matches_requires_both_fields(
        #[case] group_id: Option<&str>,
        #[case] artifact_id: Option<&str>,
        #[case] expected: bool,
    ) {
        let query = VersionQuery::new("org.casbin", "jcasbin");
        assert_eq!(query.matches(group_id, artifact_id), expected);
    }

    #[test]
    fn display_joins_key_with_colon() {
        let query = VersionQuery::new("org.casbin", "jcasbin");
        assert_eq!(query.to_string(), "org.casbin:jcasbin");
    }
}
