use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{Error, Result, Severity};

/// A catalog message that can be sent to a cluster as a service log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub severity: Severity,
    pub service_name: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub internal_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_stream_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_references: Vec<String>,
    #[serde(default, rename = "_tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// File the template was read from.
    #[serde(skip)]
    pub source_path: PathBuf,
}

/// Loads every `*.json` template below `dir`, ordered by path.
///
/// Files that are not valid templates are skipped with a warning. A directory
/// that cannot be read is an error.
pub fn load_templates(dir: &Path) -> Result<Vec<Template>> {
    let mut templates = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Template {
            path: e.path().unwrap_or(dir).to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        if !entry.file_type().is_file() || !is_json {
            continue;
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::Template {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match serde_json::from_str::<Template>(&contents) {
            Ok(mut template) => {
                template.source_path = path.to_path_buf();
                templates.push(template);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping invalid template"),
        }
    }

    debug!(dir = %dir.display(), count = templates.len(), "loaded templates");
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    const TEMPLATE: &str = r#"{
        "severity": "Warning",
        "service_name": "SREManualAction",
        "summary": "Action required: review alerts",
        "description": "Your cluster is firing **critical** alerts.",
        "internal_only": false,
        "doc_references": ["https://docs.example.com/alerts"],
        "_tags": ["t_alerts"]
    }"#;

    #[test]
    fn test_loads_nested_templates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b/second.json", TEMPLATE);
        write(dir.path(), "a/first.json", TEMPLATE);

        let templates = load_templates(dir.path()).unwrap();

        assert_eq!(templates.len(), 2);
        assert!(templates[0].source_path.ends_with("a/first.json"));
        assert!(templates[1].source_path.ends_with("b/second.json"));
        assert_eq!(templates[0].severity, Severity::Warning);
        assert_eq!(templates[0].tags, vec!["t_alerts".to_string()]);
    }

    #[test]
    fn test_skips_invalid_and_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "valid.json", TEMPLATE);
        write(dir.path(), "broken.json", "{ not json");
        write(dir.path(), "other.json", r#"{"name": "not a template"}"#);
        write(dir.path(), "README.md", "# catalog");

        let templates = load_templates(dir.path()).unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].summary, "Action required: review alerts");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = load_templates(&missing);

        assert!(matches!(result, Err(Error::Template { .. })));
    }
}
