use servicelogger::{LogEntry, Template};

/// Anything the browser can list and preview.
pub(crate) trait SelectableItem {
    /// One-line label for the list pane.
    fn title(&self) -> String;

    /// Markdown shown in the detail pane.
    fn body(&self) -> String;
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Heading, description, then one bullet per field.
fn document(summary: &str, description: &str, fields: &[String]) -> String {
    format!("# {summary}\n\n{description}\n\n{}\n", fields.join("\n"))
}

impl SelectableItem for Template {
    fn title(&self) -> String {
        self.summary.clone()
    }

    fn body(&self) -> String {
        let mut fields = vec![
            format!("- **Severity**: {}", self.severity),
            format!("- **Service**: {}", self.service_name),
            format!("- **Internal only**: {}", yes_no(self.internal_only)),
        ];
        if let Some(stream) = &self.event_stream_id {
            fields.push(format!("- **Event stream**: {stream}"));
        }
        fields.push(format!("- **File**: {}", self.source_path.display()));

        let mut body = document(&self.summary, &self.description, &fields);
        if !self.doc_references.is_empty() {
            body.push_str("\n## References\n\n");
            for reference in &self.doc_references {
                body.push_str(&format!("- {reference}\n"));
            }
        }
        if !self.tags.is_empty() {
            body.push_str("\n## Tags\n\n");
            for tag in &self.tags {
                body.push_str(&format!("- `{tag}`\n"));
            }
        }
        body
    }
}

impl SelectableItem for LogEntry {
    fn title(&self) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.severity,
            self.summary
        )
    }

    fn body(&self) -> String {
        let fields = [
            format!("- **Severity**: {}", self.severity),
            format!("- **Service**: {}", self.service_name),
            format!("- **Timestamp**: {}", self.timestamp.to_rfc3339()),
            format!("- **Created by**: {}", self.created_by),
            format!("- **Internal only**: {}", yes_no(self.internal_only)),
            format!("- **Log type**: {}", self.log_type),
            format!("- **ID**: `{}`", self.id),
        ];
        document(&self.summary, &self.description, &fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use servicelogger::Severity;

    #[test]
    fn test_log_entry_title_has_time_and_severity() {
        let entry = LogEntry {
            summary: "Cluster upgraded".to_string(),
            severity: Severity::Warning,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 2, 13, 45, 0).unwrap(),
            ..LogEntry::default()
        };

        assert_eq!(entry.title(), "2024-05-02 13:45 [Warning] Cluster upgraded");
    }

    #[test]
    fn test_log_entry_body_has_one_bullet_per_field() {
        let entry = LogEntry {
            summary: "Node replaced".to_string(),
            description: "A worker node was replaced.".to_string(),
            id: "2abc".to_string(),
            internal_only: true,
            ..LogEntry::default()
        };

        let body = entry.body();

        assert!(body.starts_with(
            "# Node replaced\n\nA worker node was replaced.\n\n- **Severity**: Info\n"
        ));
        assert!(body.ends_with("- **ID**: `2abc`\n"));
        assert_eq!(body.matches("\n- **").count(), 7);
        assert!(body.contains("- **Internal only**: yes\n"));
    }

    #[test]
    fn test_template_body_lists_references_and_tags() {
        let template = Template {
            severity: Severity::Info,
            service_name: "SREManualAction".to_string(),
            summary: "Review alerts".to_string(),
            description: "Please review.".to_string(),
            internal_only: true,
            event_stream_id: None,
            doc_references: vec!["https://docs.example.com".to_string()],
            tags: vec!["t_alerts".to_string()],
            source_path: "alerts/review.json".into(),
        };

        let body = template.body();

        assert!(body.starts_with("# Review alerts\n\nPlease review.\n\n"));
        assert!(body.contains("- **Internal only**: yes"));
        assert!(body.contains("## References\n\n- https://docs.example.com"));
        assert!(body.contains("- `t_alerts`"));
    }
}
