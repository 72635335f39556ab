use clap::{Args, ValueEnum};
use eyre::{Result, WrapErr};
use prettytable::{Cell, Row, Table};
use servicelogger::{EntryRepository, LogEntry, OcmClient};

use super::browser;
use super::config::{ConnectionArgs, FileConfig};

/// How `list` presents the retrieved entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Interactive two-pane browser
    #[default]
    Tui,
    Table,
    Json,
    JsonPretty,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Search predicate such as "severity = 'Warning'"; repeat to combine with `and`
    #[arg(long = "search", short = 's')]
    pub search: Vec<String>,

    #[arg(long, short = 'o', value_enum, default_value_t = Output::Tui)]
    pub output: Output,
}

impl ListArgs {
    pub fn run(&self, file: &FileConfig) -> Result<()> {
        let connection = self.connection.resolve(file)?;
        let client = OcmClient::new(&connection.ocm_url, &connection.ocm_token)
            .wrap_err("failed to build OCM client")?;
        let repository = EntryRepository::new(client);

        let entries = repository
            .list_all(&connection.cluster_id, &self.search)
            .wrap_err_with(|| {
                format!(
                    "failed to list service logs of cluster {}",
                    connection.cluster_id
                )
            })?;

        match self.output {
            Output::Tui => {
                if entries.is_empty() {
                    println!("No service logs found for cluster {}", connection.cluster_id);
                    return Ok(());
                }
                if let Some(entry) = browser::browse(entries)? {
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                }
            }
            Output::Table => println!("{}", table_text(&entries)),
            Output::Json => println!("{}", to_json(&entries, false)?),
            Output::JsonPretty => println!("{}", to_json(&entries, true)?),
        }
        Ok(())
    }
}

fn to_json(entries: &[LogEntry], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    }
}

fn table_text(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No service logs found.".to_string();
    }
    entries_table(entries).to_string()
}

fn entries_table(entries: &[LogEntry]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Timestamp"),
        Cell::new("Severity"),
        Cell::new("Service"),
        Cell::new("Internal"),
        Cell::new("Summary"),
    ]));

    for entry in entries {
        table.add_row(Row::new(vec![
            Cell::new(&entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(entry.severity.as_str()),
            Cell::new(&entry.service_name),
            Cell::new(if entry.internal_only { "yes" } else { "no" }),
            Cell::new(&entry.summary),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use servicelogger::Severity;

    fn entry() -> LogEntry {
        LogEntry {
            id: "2abc".to_string(),
            severity: Severity::Warning,
            service_name: "SREManualAction".to_string(),
            summary: "Node replaced".to_string(),
            internal_only: true,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            ..LogEntry::default()
        }
    }

    #[test]
    fn test_table_has_header_then_entry_row() {
        let text = table_text(&[entry()]);

        let header = text
            .lines()
            .position(|line| line.contains("Timestamp") && line.contains("Summary"))
            .unwrap();
        let row = text
            .lines()
            .position(|line| line.contains("2024-03-01 10:00:00"))
            .unwrap();
        assert!(header < row);

        let row = text.lines().nth(row).unwrap();
        for cell in ["Warning", "SREManualAction", "yes", "Node replaced"] {
            assert!(row.contains(cell), "missing {cell} in {row}");
        }
    }

    #[test]
    fn test_empty_table_is_a_message() {
        assert_eq!(table_text(&[]), "No service logs found.");
    }

    #[test]
    fn test_json_is_an_array_of_entries() {
        let compact = to_json(&[entry()], false).unwrap();
        let pretty = to_json(&[entry()], true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        for text in [compact, pretty] {
            let value: Value = serde_json::from_str(&text).unwrap();
            let entries = value.as_array().unwrap();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0]["id"], "2abc");
            assert_eq!(entries[0]["severity"], "Warning");
            assert_eq!(entries[0]["internal_only"], true);
            assert_eq!(entries[0]["timestamp"], "2024-03-01T10:00:00Z");
        }
    }

    #[test]
    fn test_empty_json_is_an_empty_array() {
        assert_eq!(to_json(&[], false).unwrap(), "[]");
    }
}
